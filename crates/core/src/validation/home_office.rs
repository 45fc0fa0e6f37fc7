//! Home-office meal scheduling.
//!
//! Weekend rules run on both dates first. A booking starting tomorrow is
//! then always on time. A booking starting today must beat the general
//! same-day cutoff and the cutoff of every selected meal.
//!
//! The end date only re-checks the snack cutoff; lunch, dinner and late
//! snack are not enforced for an end date that falls on today.

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::{HomeOffice, Meal};
use crate::types::{BookingDate, LocalTimestamp};
use crate::verdict::{first_denial, DenialReason, Verdict};

use super::weekend::{check_upcoming_weekend, check_weekend_rule};

pub fn validate(request: &HomeOffice, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &HomeOffice,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    let dates: Vec<BookingDate> = std::iter::once(request.start_date)
        .chain(request.end_date)
        .collect();

    first_denial(dates.iter().map(|&d| check_weekend_rule(d, now)))
        .and_then(|| first_denial(dates.iter().map(|&d| check_upcoming_weekend(d, now, policy))))
        .and_then(|| {
            if calendar::is_tomorrow(request.start_date, now) {
                return Verdict::allow();
            }
            check_start_date(request, now, policy).and_then(|| check_end_date(request, now, policy))
        })
}

fn check_start_date(request: &HomeOffice, now: LocalTimestamp, policy: &CutoffPolicy) -> Verdict {
    let start = request.start_date;
    if !calendar::is_today(start, now) {
        return Verdict::allow();
    }

    Verdict::deny_if(
        calendar::is_past(now, start, policy.same_day),
        DenialReason::SameDayCutoff {
            cutoff: policy.same_day,
        },
    )
    .and_then(|| {
        first_denial(request.meals.iter().map(|&meal| {
            let cutoff = policy.meal_cutoff(meal);
            Verdict::deny_if(
                calendar::is_past(now, start, cutoff),
                DenialReason::MealCutoff { meal, cutoff },
            )
        }))
    })
}

fn check_end_date(request: &HomeOffice, now: LocalTimestamp, policy: &CutoffPolicy) -> Verdict {
    match request.end_date {
        Some(end) if end != request.start_date && request.meals.contains(&Meal::Snack) => {
            Verdict::deny_if(
                calendar::missed_same_day_cutoff(end, now, policy.snack),
                DenialReason::MealCutoff {
                    meal: Meal::Snack,
                    cutoff: policy.snack,
                },
            )
        }
        _ => Verdict::allow(),
    }
}
