//! Coffee breaks must be booked by noon on the day before the event.
//!
//! The weekend rule does not apply. Same-day bookings are always refused
//! because the deadline was yesterday.

use chrono::Days;

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::CoffeeBreak;
use crate::types::LocalTimestamp;
use crate::verdict::{DenialReason, Verdict};

pub fn validate(request: &CoffeeBreak, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &CoffeeBreak,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    let Some(day_before) = request.date.checked_sub_days(Days::new(1)) else {
        return Verdict::allow();
    };
    Verdict::deny_if(
        calendar::is_past(now, day_before, policy.coffee_break_deadline),
        DenialReason::CoffeeBreakDeadline {
            cutoff: policy.coffee_break_deadline,
        },
    )
}
