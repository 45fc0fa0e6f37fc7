//! Source of "now" for the guard.
//!
//! The engine never reads the clock. The guard reads it exactly once per
//! evaluation through this trait, so tests can pin it to a fixed instant.

use chrono::{FixedOffset, Utc};
use mealbook_core::types::LocalTimestamp;

pub trait Clock {
    /// Current wall-clock time in the organization's local time zone.
    fn now(&self) -> LocalTimestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> LocalTimestamp {
        (**self).now()
    }
}

/// Real time, shifted from UTC by a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> LocalTimestamp {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub LocalTimestamp);

impl Clock for FixedClock {
    fn now(&self) -> LocalTimestamp {
        self.0
    }
}
