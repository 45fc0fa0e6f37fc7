//! Booking request model.
//!
//! One variant per request kind, each carrying only the fields its
//! validator reads. Optional fields are the ones a caller may legitimately
//! leave blank while a form is still being filled in; validators treat a
//! missing date as "nothing to check yet" and allow.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::BookingDate;

// ---------------------------------------------------------------------------
// Shift
// ---------------------------------------------------------------------------

pub const SHIFT_A: &str = "A";
pub const SHIFT_B: &str = "B";
pub const SHIFT_ADM: &str = "ADM";

/// All valid shift codes.
pub const VALID_SHIFTS: &[&str] = &[SHIFT_A, SHIFT_B, SHIFT_ADM];

/// Operational work period of the requester.
///
/// Deserializes through [`FromStr`], so `"adm"` and `"ADM"` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Shift {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "ADM")]
    Adm,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => SHIFT_A,
            Self::B => SHIFT_B,
            Self::Adm => SHIFT_ADM,
        }
    }
}

impl FromStr for Shift {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            SHIFT_A => Ok(Self::A),
            SHIFT_B => Ok(Self::B),
            SHIFT_ADM => Ok(Self::Adm),
            other => Err(CoreError::Validation(format!(
                "Unknown shift: '{other}'. Valid shifts: {}",
                VALID_SHIFTS.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Shift {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Meal
// ---------------------------------------------------------------------------

/// A meal that can be selected on a home-office booking.
///
/// Declaration order is the evaluation order of per-meal cutoffs. Accepts
/// the Portuguese codes (`almoco`, `lanche`, `jantar`, `ceia`) on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Meal {
    Lunch,
    Snack,
    Dinner,
    LateSnack,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Self::Lunch, Self::Snack, Self::Dinner, Self::LateSnack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
            Self::LateSnack => "late_snack",
        }
    }

    /// Human-readable name used in denial messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
            Self::LateSnack => "late snack",
        }
    }
}

impl FromStr for Meal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let code = match lowered.as_str() {
            "almoco" => "lunch",
            "lanche" => "snack",
            "jantar" => "dinner",
            "ceia" => "late_snack",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str() == code)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown meal: '{code}'. Valid meals: {}",
                    Self::ALL.map(|meal| meal.as_str()).join(", ")
                ))
            })
    }
}

impl TryFrom<String> for Meal {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Request variants
// ---------------------------------------------------------------------------

/// Team meal scheduling, either for a single holiday or a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSchedule {
    pub shift: Shift,
    pub is_holiday: bool,
    pub holiday_date: Option<BookingDate>,
    pub start_date: Option<BookingDate>,
    pub end_date: Option<BookingDate>,
}

/// Meals delivered to an employee working from home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeOffice {
    pub shift: Shift,
    pub start_date: BookingDate,
    pub end_date: Option<BookingDate>,
    pub meals: BTreeSet<Meal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackRequest {
    pub date: BookingDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSchedule {
    pub date: BookingDate,
}

/// Coffee break for an event. `date` is the day of the event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeBreak {
    pub date: BookingDate,
}

/// Extra shuttle route on a weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRoute {
    pub start_date: Option<BookingDate>,
    pub end_date: Option<BookingDate>,
}

/// A booking request of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    TeamSchedule(TeamSchedule),
    HomeOffice(HomeOffice),
    SnackRequest(SnackRequest),
    VisitorSchedule(VisitorSchedule),
    CoffeeBreak(CoffeeBreak),
    ExtraRoute(ExtraRoute),
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::TeamSchedule(_) => RequestKind::TeamSchedule,
            Self::HomeOffice(_) => RequestKind::HomeOffice,
            Self::SnackRequest(_) => RequestKind::SnackRequest,
            Self::VisitorSchedule(_) => RequestKind::VisitorSchedule,
            Self::CoffeeBreak(_) => RequestKind::CoffeeBreak,
            Self::ExtraRoute(_) => RequestKind::ExtraRoute,
        }
    }
}

// ---------------------------------------------------------------------------
// Request kind
// ---------------------------------------------------------------------------

pub const KIND_TEAM_SCHEDULE: &str = "team_schedule";
pub const KIND_HOME_OFFICE: &str = "home_office";
pub const KIND_SNACK_REQUEST: &str = "snack_request";
pub const KIND_VISITOR_SCHEDULE: &str = "visitor_schedule";
pub const KIND_COFFEE_BREAK: &str = "coffee_break";
pub const KIND_EXTRA_ROUTE: &str = "extra_route";

/// All valid request kind strings.
pub const VALID_KINDS: &[&str] = &[
    KIND_TEAM_SCHEDULE,
    KIND_HOME_OFFICE,
    KIND_SNACK_REQUEST,
    KIND_VISITOR_SCHEDULE,
    KIND_COFFEE_BREAK,
    KIND_EXTRA_ROUTE,
];

/// Discriminant of [`Request`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    TeamSchedule,
    HomeOffice,
    SnackRequest,
    VisitorSchedule,
    CoffeeBreak,
    ExtraRoute,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeamSchedule => KIND_TEAM_SCHEDULE,
            Self::HomeOffice => KIND_HOME_OFFICE,
            Self::SnackRequest => KIND_SNACK_REQUEST,
            Self::VisitorSchedule => KIND_VISITOR_SCHEDULE,
            Self::CoffeeBreak => KIND_COFFEE_BREAK,
            Self::ExtraRoute => KIND_EXTRA_ROUTE,
        }
    }
}

impl FromStr for RequestKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_TEAM_SCHEDULE => Ok(Self::TeamSchedule),
            KIND_HOME_OFFICE => Ok(Self::HomeOffice),
            KIND_SNACK_REQUEST => Ok(Self::SnackRequest),
            KIND_VISITOR_SCHEDULE => Ok(Self::VisitorSchedule),
            KIND_COFFEE_BREAK => Ok(Self::CoffeeBreak),
            KIND_EXTRA_ROUTE => Ok(Self::ExtraRoute),
            other => Err(CoreError::Validation(format!(
                "Unknown request kind: '{other}'. Valid kinds: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
