//! Fixed calendar used by the validator tests.
//!
//! The reference week runs from Monday 2024-01-15 to Sunday 2024-01-21.

use chrono::NaiveDate;

use crate::types::{BookingDate, LocalTimestamp};

pub fn date(y: i32, m: u32, d: u32) -> BookingDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: BookingDate, hour: u32, minute: u32) -> LocalTimestamp {
    at_s(day, hour, minute, 0)
}

pub fn at_s(day: BookingDate, hour: u32, minute: u32, second: u32) -> LocalTimestamp {
    day.and_hms_opt(hour, minute, second).unwrap()
}

pub fn monday() -> BookingDate {
    date(2024, 1, 15)
}

pub fn tuesday() -> BookingDate {
    date(2024, 1, 16)
}

pub fn wednesday() -> BookingDate {
    date(2024, 1, 17)
}

pub fn thursday() -> BookingDate {
    date(2024, 1, 18)
}

pub fn friday() -> BookingDate {
    date(2024, 1, 19)
}

pub fn saturday() -> BookingDate {
    date(2024, 1, 20)
}

pub fn sunday() -> BookingDate {
    date(2024, 1, 21)
}
