//! Allow/deny verdicts returned by every validator.
//!
//! A denial is a normal return value, never an error. The reason is kept as
//! data ([`DenialReason`]) so callers can localize or log it without parsing
//! the English message.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::request::Meal;

/// Why a booking was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    /// The target falls on the weekend that is already under way.
    WeekendInProgress,
    /// The target is on the upcoming weekend and the Friday deadline passed.
    UpcomingWeekendDeadline { deadline: NaiveTime },
    /// Same-day booking after the morning cutoff.
    SameDayCutoff { cutoff: NaiveTime },
    /// Shift A late-afternoon snack booked too late on the same day.
    ShiftASnackCutoff { cutoff: NaiveTime },
    /// A selected home-office meal missed its same-day cutoff.
    MealCutoff { meal: Meal, cutoff: NaiveTime },
    /// Same-day snack request after the snack cutoff.
    SnackCutoff { cutoff: NaiveTime },
    /// Same-day visitor booking after the morning cutoff.
    VisitorSameDayCutoff { cutoff: NaiveTime },
    /// Coffee break booked after noon of the previous day.
    CoffeeBreakDeadline { cutoff: NaiveTime },
    /// Extra routes only run on Saturday or Sunday.
    ExtraRouteWeekendOnly,
    /// Extra route for this weekend booked after the Friday deadline.
    ExtraRouteFridayDeadline { deadline: NaiveTime },
}

impl DenialReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WeekendInProgress => "WEEKEND_IN_PROGRESS",
            Self::UpcomingWeekendDeadline { .. } => "UPCOMING_WEEKEND_DEADLINE",
            Self::SameDayCutoff { .. } => "SAME_DAY_CUTOFF",
            Self::ShiftASnackCutoff { .. } => "SHIFT_A_SNACK_CUTOFF",
            Self::MealCutoff { .. } => "MEAL_CUTOFF",
            Self::SnackCutoff { .. } => "SNACK_CUTOFF",
            Self::VisitorSameDayCutoff { .. } => "VISITOR_SAME_DAY_CUTOFF",
            Self::CoffeeBreakDeadline { .. } => "COFFEE_BREAK_DEADLINE",
            Self::ExtraRouteWeekendOnly => "EXTRA_ROUTE_WEEKEND_ONLY",
            Self::ExtraRouteFridayDeadline { .. } => "EXTRA_ROUTE_FRIDAY_DEADLINE",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeekendInProgress => {
                f.write_str("Bookings for the current weekend are closed")
            }
            Self::UpcomingWeekendDeadline { deadline } => write!(
                f,
                "Bookings for the upcoming weekend must be made by Friday {}",
                deadline.format("%H:%M")
            ),
            Self::SameDayCutoff { cutoff } => write!(
                f,
                "Same-day bookings must be made by {}",
                cutoff.format("%H:%M")
            ),
            Self::ShiftASnackCutoff { cutoff } => write!(
                f,
                "Shift A late-afternoon snack must be booked by {} on the same day",
                cutoff.format("%H:%M")
            ),
            Self::MealCutoff { meal, cutoff } => write!(
                f,
                "Same-day {} must be booked by {}",
                meal.label(),
                cutoff.format("%H:%M")
            ),
            Self::SnackCutoff { cutoff } => write!(
                f,
                "Same-day snack requests must be made by {}",
                cutoff.format("%H:%M")
            ),
            Self::VisitorSameDayCutoff { cutoff } => write!(
                f,
                "Same-day visitor bookings must be made by {}",
                cutoff.format("%H:%M")
            ),
            Self::CoffeeBreakDeadline { cutoff } => write!(
                f,
                "Coffee breaks must be booked by {} on the day before the event",
                cutoff.format("%H:%M")
            ),
            Self::ExtraRouteWeekendOnly => {
                f.write_str("Extra routes can only be scheduled for Saturday or Sunday")
            }
            Self::ExtraRouteFridayDeadline { deadline } => write!(
                f,
                "Extra routes for this weekend must be booked by Friday {}",
                deadline.format("%H:%M")
            ),
        }
    }
}

/// Outcome of validating one request at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub allowed: bool,
    /// Display message; empty when allowed.
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denial: Option<DenialReason>,
}

impl Verdict {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: String::new(),
            denial: None,
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: reason.to_string(),
            denial: Some(reason),
        }
    }

    /// Deny with `reason` when `violated` holds, otherwise allow.
    pub fn deny_if(violated: bool, reason: DenialReason) -> Self {
        if violated {
            Self::deny(reason)
        } else {
            Self::allow()
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Run the next rule only if this verdict allows. The first denial wins.
    pub fn and_then(self, next: impl FnOnce() -> Verdict) -> Verdict {
        if self.allowed {
            next()
        } else {
            self
        }
    }

    /// Convert into a `Result`, mapping a denial to [`CoreError::PolicyDenied`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.allowed {
            return Ok(());
        }
        match self.denial {
            Some(denial) => Err(CoreError::PolicyDenied {
                code: denial.code(),
                message: self.reason,
            }),
            None => Err(CoreError::Validation(self.reason)),
        }
    }
}

/// First denial among `verdicts`, or allow when every one allows.
///
/// Lazily evaluated, so rules after the first denial never run.
pub fn first_denial(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
    verdicts
        .into_iter()
        .find(|v| !v.allowed)
        .unwrap_or_else(Verdict::allow)
}
