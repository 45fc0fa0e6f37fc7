//! Extra weekend shuttle routes.
//!
//! Rules in order: weekend in progress, Saturday/Sunday only, and on Friday
//! the late-morning deadline for this weekend's routes.

use chrono::{Datelike, Weekday};

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::ExtraRoute;
use crate::types::{BookingDate, LocalTimestamp};
use crate::verdict::{first_denial, DenialReason, Verdict};

use super::weekend::check_weekend_rule;

pub fn validate(request: &ExtraRoute, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &ExtraRoute,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    let dates: Vec<BookingDate> = [request.start_date, request.end_date]
        .into_iter()
        .flatten()
        .collect();

    first_denial(dates.iter().map(|&d| check_weekend_rule(d, now)))
        .and_then(|| {
            first_denial(dates.iter().map(|&d| {
                Verdict::deny_if(!calendar::is_weekend(d), DenialReason::ExtraRouteWeekendOnly)
            }))
        })
        .and_then(|| check_friday_deadline(&dates, now, policy))
}

fn check_friday_deadline(
    dates: &[BookingDate],
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    let today = calendar::today(now);
    if today.weekday() != Weekday::Fri
        || !calendar::is_past(now, today, policy.extra_route_deadline)
    {
        return Verdict::allow();
    }

    let this_weekend = [calendar::add_days(today, 1), calendar::add_days(today, 2)];
    Verdict::deny_if(
        dates.iter().any(|d| this_weekend.contains(&Some(*d))),
        DenialReason::ExtraRouteFridayDeadline {
            deadline: policy.extra_route_deadline,
        },
    )
}
