//! Snack requests: weekend rule, then the same-day snack cutoff.

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::SnackRequest;
use crate::types::LocalTimestamp;
use crate::verdict::{DenialReason, Verdict};

use super::weekend::check_weekend_rule;

pub fn validate(request: &SnackRequest, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &SnackRequest,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    check_weekend_rule(request.date, now).and_then(|| {
        Verdict::deny_if(
            calendar::missed_same_day_cutoff(request.date, now, policy.snack),
            DenialReason::SnackCutoff {
                cutoff: policy.snack,
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::*;

    #[test]
    fn same_day_before_nine_is_allowed() {
        let req = SnackRequest { date: monday() };
        assert!(validate(&req, at(monday(), 8, 59)).is_allowed());
        assert!(validate(&req, at(monday(), 9, 0)).is_allowed());
    }

    #[test]
    fn same_day_after_nine_is_denied() {
        let req = SnackRequest { date: monday() };
        let v = validate(&req, at_s(monday(), 9, 0, 1));
        assert_eq!(v.denial.map(|d| d.code()), Some("SNACK_CUTOFF"));
    }

    #[test]
    fn tomorrow_is_allowed_late_at_night() {
        let req = SnackRequest { date: tuesday() };
        assert!(validate(&req, at(monday(), 23, 30)).is_allowed());
    }

    #[test]
    fn saturday_blocks_the_current_weekend() {
        let now = at(saturday(), 10, 0);
        assert!(!validate(&SnackRequest { date: saturday() }, now).is_allowed());
        assert!(!validate(&SnackRequest { date: sunday() }, now).is_allowed());
    }

    #[test]
    fn sunday_allows_monday() {
        let req = SnackRequest {
            date: date(2024, 1, 22),
        };
        assert!(validate(&req, at(sunday(), 10, 0)).is_allowed());
    }

    #[test]
    fn upcoming_weekend_has_no_friday_deadline() {
        let req = SnackRequest { date: saturday() };
        assert!(validate(&req, at(friday(), 16, 0)).is_allowed());
    }
}
