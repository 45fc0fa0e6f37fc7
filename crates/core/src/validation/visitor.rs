//! Visitor meal scheduling: weekend rule, then the morning same-day cutoff.

use crate::calendar;
use crate::policy::CutoffPolicy;
use crate::request::VisitorSchedule;
use crate::types::LocalTimestamp;
use crate::verdict::{DenialReason, Verdict};

use super::weekend::check_weekend_rule;

pub fn validate(request: &VisitorSchedule, now: LocalTimestamp) -> Verdict {
    validate_with_policy(request, now, &CutoffPolicy::default())
}

pub fn validate_with_policy(
    request: &VisitorSchedule,
    now: LocalTimestamp,
    policy: &CutoffPolicy,
) -> Verdict {
    check_weekend_rule(request.date, now).and_then(|| {
        Verdict::deny_if(
            calendar::missed_same_day_cutoff(request.date, now, policy.same_day),
            DenialReason::VisitorSameDayCutoff {
                cutoff: policy.same_day,
            },
        )
    })
}
