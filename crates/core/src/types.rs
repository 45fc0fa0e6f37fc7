/// Wall-clock instant in the organization's local time zone.
///
/// Every cutoff rule is phrased in local time ("by 07:30"), so the engine
/// never sees a UTC instant. Converting from UTC is the caller's job.
pub type LocalTimestamp = chrono::NaiveDateTime;

/// A calendar day with no time-of-day component.
pub type BookingDate = chrono::NaiveDate;
