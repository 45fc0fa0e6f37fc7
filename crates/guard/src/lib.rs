//! Submission guard for booking requests.
//!
//! Wraps the `mealbook_core` validation engine with the pieces a server
//! needs before persisting a booking: configuration, the real clock, payload
//! decoding and boundary checks, and logging.

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod payload;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GuardConfig;
pub use error::{GuardError, GuardResult};
pub use guard::SubmissionGuard;
pub use payload::BookingPayload;
