//! Booking window rules for meal and transport requests.
//!
//! Pure logic, no I/O and no clock access: callers pass "now" in the
//! organization's local time and get back a [`Verdict`].

pub mod calendar;
pub mod error;
pub mod policy;
pub mod request;
pub mod types;
pub mod validation;
pub mod verdict;

pub use policy::CutoffPolicy;
pub use request::{Meal, Request, RequestKind, Shift};
pub use validation::{earliest_bookable_date, validate, validate_with_policy};
pub use verdict::{DenialReason, Verdict};
