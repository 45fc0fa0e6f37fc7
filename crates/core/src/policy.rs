//! Cutoff instants used by the booking window rules.
//!
//! The defaults are the organization's published rules. Deployments may
//! override them, but every validator has an entry point that uses
//! [`CutoffPolicy::default`] so callers normally never touch this type.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::request::Meal;

// ---------------------------------------------------------------------------
// Default cutoffs (hour, minute)
// ---------------------------------------------------------------------------

/// Latest time for same-day team, home-office and visitor meals.
pub const DEFAULT_SAME_DAY_CUTOFF: (u32, u32) = (7, 30);

/// Latest time for a same-day snack.
pub const DEFAULT_SNACK_CUTOFF: (u32, u32) = (9, 0);

/// Friday deadline for bookings on the upcoming weekend.
pub const DEFAULT_WEEKEND_DEADLINE: (u32, u32) = (9, 0);

/// Friday deadline for extra routes on this weekend.
pub const DEFAULT_EXTRA_ROUTE_DEADLINE: (u32, u32) = (11, 0);

/// Deadline on the day before a coffee break.
pub const DEFAULT_COFFEE_BREAK_DEADLINE: (u32, u32) = (12, 0);

/// Time-of-day cutoffs applied by the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffPolicy {
    pub same_day: NaiveTime,
    pub snack: NaiveTime,
    pub weekend_deadline: NaiveTime,
    pub extra_route_deadline: NaiveTime,
    pub coffee_break_deadline: NaiveTime,
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            same_day: clock(DEFAULT_SAME_DAY_CUTOFF),
            snack: clock(DEFAULT_SNACK_CUTOFF),
            weekend_deadline: clock(DEFAULT_WEEKEND_DEADLINE),
            extra_route_deadline: clock(DEFAULT_EXTRA_ROUTE_DEADLINE),
            coffee_break_deadline: clock(DEFAULT_COFFEE_BREAK_DEADLINE),
        }
    }
}

impl CutoffPolicy {
    /// Same-day cutoff for a single home-office meal.
    ///
    /// Snacks follow the later snack cutoff; every other meal follows the
    /// general same-day cutoff.
    pub fn meal_cutoff(&self, meal: Meal) -> NaiveTime {
        match meal {
            Meal::Snack => self.snack,
            Meal::Lunch | Meal::Dinner | Meal::LateSnack => self.same_day,
        }
    }
}

fn clock((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("default cutoffs are valid times")
}
