//! Calendar and time-of-day arithmetic shared by the validators.
//!
//! All functions take "now" explicitly. Date arithmetic is checked; an
//! overflow at the edge of chrono's range yields `None`, which validators
//! read as "rule does not apply".

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

use crate::types::{BookingDate, LocalTimestamp};

/// Calendar date of `now`.
pub fn today(now: LocalTimestamp) -> BookingDate {
    now.date()
}

/// The day after `now`.
pub fn tomorrow(now: LocalTimestamp) -> Option<BookingDate> {
    today(now).succ_opt()
}

pub fn is_today(date: BookingDate, now: LocalTimestamp) -> bool {
    date == today(now)
}

pub fn is_tomorrow(date: BookingDate, now: LocalTimestamp) -> bool {
    tomorrow(now) == Some(date)
}

pub fn is_weekend(date: BookingDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `now` is strictly after `time` on `date`.
///
/// A booking made exactly at the cutoff instant is still on time.
pub fn is_past(now: LocalTimestamp, date: BookingDate, time: NaiveTime) -> bool {
    now > date.and_time(time)
}

/// `target` is today and today's `cutoff` has passed.
pub fn missed_same_day_cutoff(target: BookingDate, now: LocalTimestamp, cutoff: NaiveTime) -> bool {
    is_today(target, now) && is_past(now, target, cutoff)
}

/// Days from `from` forward to the next `to` (0 when they coincide).
pub fn days_until(from: Weekday, to: Weekday) -> u64 {
    u64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}

/// The first `weekday` on or after `date`.
pub fn next_weekday(date: BookingDate, weekday: Weekday) -> Option<BookingDate> {
    date.checked_add_days(Days::new(days_until(date.weekday(), weekday)))
}

pub fn add_days(date: BookingDate, days: u64) -> Option<BookingDate> {
    date.checked_add_days(Days::new(days))
}

/// The weekend following the next Friday on or after today, together with
/// that Friday's booking deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingWeekend {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
    /// Friday at the deadline time; bookings for the weekend close after it.
    pub closes_at: LocalTimestamp,
}

impl UpcomingWeekend {
    /// Locate the upcoming weekend relative to `now`.
    ///
    /// On a Friday the "next Friday" is today. On Saturday or Sunday it is
    /// the following week's Friday; the weekend already under way is the
    /// business of the weekend rule, not of this window.
    pub fn from_now(now: LocalTimestamp, deadline: NaiveTime) -> Option<Self> {
        let friday = next_weekday(today(now), Weekday::Fri)?;
        Some(Self {
            friday,
            saturday: add_days(friday, 1)?,
            sunday: add_days(friday, 2)?,
            closes_at: friday.and_time(deadline),
        })
    }

    pub fn contains(&self, date: BookingDate) -> bool {
        date >= self.saturday && date <= self.sunday
    }

    pub fn is_closed(&self, now: LocalTimestamp) -> bool {
        now > self.closes_at
    }
}
