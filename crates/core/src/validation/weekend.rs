//! Weekend rules shared by most validators.
//!
//! [`check_weekend_rule`] is the blanket ban on the weekend already under
//! way. [`check_upcoming_weekend`] is the Friday advance-booking deadline for
//! the next weekend, used by the team and home-office validators.

use chrono::{Datelike, Weekday};

use crate::calendar::{self, UpcomingWeekend};
use crate::policy::CutoffPolicy;
use crate::types::{BookingDate, LocalTimestamp};
use crate::verdict::{DenialReason, Verdict};

/// Deny bookings for the weekend that has already started.
///
/// - Saturday: today and tomorrow are closed, whatever the time.
/// - Sunday: today is closed; Monday is open.
/// - Any other day: no blanket restriction.
pub fn check_weekend_rule(target: BookingDate, now: LocalTimestamp) -> Verdict {
    let today = calendar::today(now);
    let closed = match today.weekday() {
        Weekday::Sat => target == today || calendar::is_tomorrow(target, now),
        Weekday::Sun => target == today,
        _ => false,
    };
    Verdict::deny_if(closed, DenialReason::WeekendInProgress)
}

/// Deny bookings for the upcoming weekend once Friday's deadline has passed.
pub fn check_upcoming_weekend(
    target: BookingDate,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    let Some(weekend) = UpcomingWeekend::from_now(now, policy.weekend_deadline) else {
        return Verdict::allow();
    };
    Verdict::deny_if(
        weekend.contains(target) && weekend.is_closed(now),
        DenialReason::UpcomingWeekendDeadline {
            deadline: policy.weekend_deadline,
        },
    )
}
