use chrono::{FixedOffset, NaiveTime};
use mealbook_core::CutoffPolicy;

use crate::error::{GuardError, GuardResult};

/// Offset of the organization's local time from UTC, in minutes (UTC-03:00).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Guard configuration loaded from environment variables.
///
/// All fields have defaults matching the published booking rules.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Offset applied to the system clock to get local wall-clock time.
    pub utc_offset: FixedOffset,
    /// Cutoffs handed to the validation engine.
    pub policy: CutoffPolicy,
}

impl GuardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default |
    /// |------------------------------|---------|
    /// | `BOOKING_UTC_OFFSET_MINUTES` | `-180`  |
    /// | `SAME_DAY_CUTOFF`            | `07:30` |
    /// | `SNACK_CUTOFF`               | `09:00` |
    /// | `WEEKEND_DEADLINE`           | `09:00` |
    /// | `EXTRA_ROUTE_DEADLINE`       | `11:00` |
    /// | `COFFEE_BREAK_DEADLINE`      | `12:00` |
    pub fn from_env() -> GuardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GuardResult<Self> {
        let offset_minutes: i32 = match lookup("BOOKING_UTC_OFFSET_MINUTES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                GuardError::Config(format!(
                    "BOOKING_UTC_OFFSET_MINUTES must be an integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_UTC_OFFSET_MINUTES,
        };
        let utc_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                GuardError::Config(format!(
                    "BOOKING_UTC_OFFSET_MINUTES out of range: {offset_minutes}"
                ))
            })?;

        let defaults = CutoffPolicy::default();
        let policy = CutoffPolicy {
            same_day: time_var(&lookup, "SAME_DAY_CUTOFF", defaults.same_day)?,
            snack: time_var(&lookup, "SNACK_CUTOFF", defaults.snack)?,
            weekend_deadline: time_var(&lookup, "WEEKEND_DEADLINE", defaults.weekend_deadline)?,
            extra_route_deadline: time_var(
                &lookup,
                "EXTRA_ROUTE_DEADLINE",
                defaults.extra_route_deadline,
            )?,
            coffee_break_deadline: time_var(
                &lookup,
                "COFFEE_BREAK_DEADLINE",
                defaults.coffee_break_deadline,
            )?,
        };

        Ok(Self { utc_offset, policy })
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60)
                .expect("default offset is within range"),
            policy: CutoffPolicy::default(),
        }
    }
}

/// Read an `HH:MM` time, falling back to `default` when unset.
fn time_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: NaiveTime,
) -> GuardResult<NaiveTime> {
    match lookup(key) {
        Some(raw) => NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
            GuardError::Config(format!("{key} must be a time in HH:MM format, got '{raw}'"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = GuardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.policy, CutoffPolicy::default());
        assert_eq!(config.utc_offset.local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn overrides_are_applied() {
        let config = GuardConfig::from_lookup(lookup(&[
            ("BOOKING_UTC_OFFSET_MINUTES", "60"),
            ("SAME_DAY_CUTOFF", "08:15"),
            ("EXTRA_ROUTE_DEADLINE", " 10:00 "),
        ]))
        .unwrap();
        assert_eq!(config.utc_offset.local_minus_utc(), 3600);
        assert_eq!(config.policy.same_day, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        assert_eq!(
            config.policy.extra_route_deadline,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(config.policy.snack, CutoffPolicy::default().snack);
    }

    #[test]
    fn malformed_time_is_rejected() {
        let err = GuardConfig::from_lookup(lookup(&[("SNACK_CUTOFF", "9am")])).unwrap_err();
        assert_matches!(err, GuardError::Config(msg) if msg.contains("SNACK_CUTOFF"));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let err = GuardConfig::from_lookup(lookup(&[("BOOKING_UTC_OFFSET_MINUTES", "2000")]))
            .unwrap_err();
        assert_matches!(err, GuardError::Config(_));
    }

    #[test]
    fn default_matches_empty_environment() {
        let config = GuardConfig::default();
        assert_eq!(config.utc_offset.local_minus_utc(), -3 * 3600);
        assert_eq!(config.policy, CutoffPolicy::default());
    }
}
