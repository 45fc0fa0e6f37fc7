//! Team meal scheduling.
//!
//! Holiday mode checks only the weekend rules on the holiday date. Range
//! mode checks start and end dates independently, rule by rule, in this
//! order: weekend in progress, upcoming-weekend deadline, same-day cutoff,
//! shift A snack cutoff. The first denial wins.

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::{Shift, TeamSchedule};
use crate::types::{BookingDate, LocalTimestamp};
use crate::verdict::{first_denial, DenialReason, Verdict};

use super::weekend::{check_upcoming_weekend, check_weekend_rule};

pub fn validate(request: &TeamSchedule, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &TeamSchedule,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    if request.is_holiday {
        return match request.holiday_date {
            Some(holiday) => check_weekend_rule(holiday, now)
                .and_then(|| check_upcoming_weekend(holiday, now, policy)),
            None => Verdict::allow(),
        };
    }

    let dates: Vec<BookingDate> = [request.start_date, request.end_date]
        .into_iter()
        .flatten()
        .collect();

    first_denial(dates.iter().map(|&d| check_weekend_rule(d, now)))
        .and_then(|| first_denial(dates.iter().map(|&d| check_upcoming_weekend(d, now, policy))))
        .and_then(|| {
            first_denial(dates.iter().map(|&d| {
                Verdict::deny_if(
                    calendar::missed_same_day_cutoff(d, now, policy.same_day),
                    DenialReason::SameDayCutoff {
                        cutoff: policy.same_day,
                    },
                )
            }))
        })
        .and_then(|| {
            first_denial(dates.iter().map(|&d| {
                Verdict::deny_if(
                    request.shift == Shift::A
                        && calendar::missed_same_day_cutoff(d, now, policy.snack),
                    DenialReason::ShiftASnackCutoff {
                        cutoff: policy.snack,
                    },
                )
            }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::*;
    use chrono::NaiveTime;

    fn range(shift: Shift, start: BookingDate, end: BookingDate) -> TeamSchedule {
        TeamSchedule {
            shift,
            is_holiday: false,
            holiday_date: None,
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    fn holiday(date: BookingDate) -> TeamSchedule {
        TeamSchedule {
            shift: Shift::B,
            is_holiday: true,
            holiday_date: Some(date),
            start_date: None,
            end_date: None,
        }
    }

    // -----------------------------------------------------------------------
    // Same-day cutoff
    // -----------------------------------------------------------------------

    #[test]
    fn shift_a_same_day_boundary() {
        let req = range(Shift::A, monday(), monday());
        assert!(validate(&req, at_s(monday(), 7, 29, 59)).is_allowed());
        let v = validate(&req, at_s(monday(), 7, 30, 1));
        assert_eq!(v.denial.map(|d| d.code()), Some("SAME_DAY_CUTOFF"));
    }

    #[test]
    fn shift_b_single_day_scenario() {
        let req = range(Shift::B, monday(), monday());
        assert!(validate(&req, at(monday(), 7, 0)).is_allowed());

        let v = validate(&req, at(monday(), 8, 0));
        assert!(!v.is_allowed());
        assert!(v.reason.contains("07:30"), "reason was: {}", v.reason);
    }

    #[test]
    fn end_date_today_is_checked_too() {
        let yesterday = date(2024, 1, 14);
        let req = range(Shift::Adm, yesterday, monday());
        assert!(!validate(&req, at(monday(), 9, 0)).is_allowed());
    }

    #[test]
    fn future_range_is_allowed_late_in_the_day() {
        let req = range(Shift::A, tuesday(), friday());
        assert!(validate(&req, at(monday(), 23, 0)).is_allowed());
    }

    #[test]
    fn shift_a_snack_cutoff_applies_after_base_cutoff_is_relaxed() {
        let policy = CutoffPolicy {
            same_day: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            ..CutoffPolicy::default()
        };
        let now = at(monday(), 9, 30);

        let a = validate_with_policy(&range(Shift::A, monday(), monday()), now, &policy);
        assert_eq!(
            a.denial,
            Some(DenialReason::ShiftASnackCutoff {
                cutoff: policy.snack
            })
        );

        let b = validate_with_policy(&range(Shift::B, monday(), monday()), now, &policy);
        assert!(b.is_allowed());
    }

    // -----------------------------------------------------------------------
    // Weekend rules
    // -----------------------------------------------------------------------

    #[test]
    fn saturday_blocks_current_weekend_range() {
        let req = range(Shift::B, sunday(), sunday());
        let v = validate(&req, at(saturday(), 10, 0));
        assert_eq!(v.denial, Some(DenialReason::WeekendInProgress));
    }

    #[test]
    fn friday_deadline_for_upcoming_weekend() {
        let req = range(Shift::B, saturday(), saturday());
        assert!(validate(&req, at(friday(), 8, 0)).is_allowed());
        let v = validate(&req, at(friday(), 10, 0));
        assert_eq!(v.denial.map(|d| d.code()), Some("UPCOMING_WEEKEND_DEADLINE"));
    }

    #[test]
    fn friday_deadline_checks_end_date_alone() {
        let req = range(Shift::B, thursday(), saturday());
        assert!(validate(&req, at(friday(), 8, 0)).is_allowed());
        let v = validate(&req, at(friday(), 10, 0));
        assert_eq!(v.denial.map(|d| d.code()), Some("UPCOMING_WEEKEND_DEADLINE"));
    }

    #[test]
    fn weekend_rule_wins_over_same_day_cutoff() {
        let req = range(Shift::A, saturday(), saturday());
        let v = validate(&req, at(saturday(), 12, 0));
        assert_eq!(v.denial, Some(DenialReason::WeekendInProgress));
    }

    // -----------------------------------------------------------------------
    // Holiday mode
    // -----------------------------------------------------------------------

    #[test]
    fn holiday_on_upcoming_weekend_after_deadline_is_denied() {
        let v = validate(&holiday(sunday()), at(friday(), 9, 1));
        assert!(!v.is_allowed());
    }

    #[test]
    fn holiday_today_skips_same_day_cutoff() {
        let v = validate(&holiday(wednesday()), at(wednesday(), 15, 0));
        assert!(v.is_allowed());
    }

    #[test]
    fn holiday_without_date_is_allowed() {
        let mut req = holiday(monday());
        req.holiday_date = None;
        assert!(validate(&req, at(saturday(), 10, 0)).is_allowed());
    }

    #[test]
    fn holiday_mode_ignores_range_dates() {
        let mut req = holiday(wednesday());
        req.start_date = Some(monday());
        assert!(validate(&req, at(monday(), 12, 0)).is_allowed());
    }

    // -----------------------------------------------------------------------
    // Missing fields and determinism
    // -----------------------------------------------------------------------

    #[test]
    fn range_without_dates_is_allowed() {
        let req = TeamSchedule {
            shift: Shift::A,
            is_holiday: false,
            holiday_date: None,
            start_date: None,
            end_date: None,
        };
        assert!(validate(&req, at(monday(), 23, 0)).is_allowed());
    }

    #[test]
    fn same_input_same_verdict() {
        let req = range(Shift::A, monday(), tuesday());
        let now = at(monday(), 8, 15);
        assert_eq!(validate(&req, now), validate(&req, now));
    }
}
