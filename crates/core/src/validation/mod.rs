//! Booking window validation engine.
//!
//! One module per request kind, each exposing `validate(request, now)` and
//! `validate_with_policy(request, now, policy)`. Every function here is pure:
//! "now" is always a parameter and the same inputs give the same verdict.

pub mod coffee_break;
pub mod extra_route;
pub mod home_office;
pub mod snack;
pub mod team;
pub mod visitor;
pub mod weekend;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::{
    CoffeeBreak, ExtraRoute, HomeOffice, Request, SnackRequest, TeamSchedule, VisitorSchedule,
};
use crate::types::{BookingDate, LocalTimestamp};
use crate::verdict::Verdict;

pub use weekend::check_weekend_rule;

/// Maximum number of days [`earliest_bookable_date`] will scan.
pub const MAX_SCAN_HORIZON_DAYS: u32 = 366;

/// Validate any request with the default cutoffs.
pub fn validate(request: &Request, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

/// Validate any request, routing to the validator for its kind.
pub fn validate_with_policy(
    request: &Request,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    match request {
        Request::TeamSchedule(r) => team::validate_with_policy(r, now, policy),
        Request::HomeOffice(r) => home_office::validate_with_policy(r, now, policy),
        Request::SnackRequest(r) => snack::validate_with_policy(r, now, policy),
        Request::VisitorSchedule(r) => visitor::validate_with_policy(r, now, policy),
        Request::CoffeeBreak(r) => coffee_break::validate_with_policy(r, now, policy),
        Request::ExtraRoute(r) => extra_route::validate_with_policy(r, now, policy),
    }
}

/// First date, starting today, on which `template` could still be booked.
///
/// Every date field of `template` is moved onto the candidate day (its other
/// fields, such as shift and meals, are kept). Returns `None` when nothing
/// within `horizon_days` is bookable. The horizon is capped at
/// [`MAX_SCAN_HORIZON_DAYS`].
pub fn earliest_bookable_date(
    template: &Request,
    now: LocalTimestamp,
    horizon_days: u32,
) -> Option<BookingDate> {
    earliest_bookable_date_with_policy(template, now, horizon_days, &CutoffPolicy::default())
}

pub fn earliest_bookable_date_with_policy(
    template: &Request,
    now: LocalTimestamp,
    horizon_days: u32,
    policy: &CutoffPolicy,
) -> Option<BookingDate> {
    let today = calendar::today(now);
    (0..=u64::from(horizon_days.min(MAX_SCAN_HORIZON_DAYS)))
        .map_while(|offset| calendar::add_days(today, offset))
        .find(|&day| validate_with_policy(&retarget(template, day), now, policy).is_allowed())
}

/// Copy of `request` with every present date field set to `day`.
fn retarget(request: &Request, day: BookingDate) -> Request {
    match request {
        Request::TeamSchedule(r) if r.is_holiday => Request::TeamSchedule(TeamSchedule {
            holiday_date: Some(day),
            ..r.clone()
        }),
        Request::TeamSchedule(r) => Request::TeamSchedule(TeamSchedule {
            start_date: Some(day),
            end_date: Some(day),
            ..r.clone()
        }),
        Request::HomeOffice(r) => Request::HomeOffice(HomeOffice {
            start_date: day,
            end_date: r.end_date.map(|_| day),
            ..r.clone()
        }),
        Request::SnackRequest(_) => Request::SnackRequest(SnackRequest { date: day }),
        Request::VisitorSchedule(_) => Request::VisitorSchedule(VisitorSchedule { date: day }),
        Request::CoffeeBreak(_) => Request::CoffeeBreak(CoffeeBreak { date: day }),
        Request::ExtraRoute(r) => Request::ExtraRoute(ExtraRoute {
            start_date: Some(day),
            end_date: r.end_date.map(|_| day),
        }),
    }
}
