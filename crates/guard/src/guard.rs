//! Submission guard: re-validates a booking payload before it is persisted.
//!
//! The guard is the only place "now" is read. It decodes and checks the
//! payload, asks the engine for a verdict, and either reports the verdict
//! (`evaluate`) or turns a denial into an error (`enforce`).

use chrono::NaiveDate;
use mealbook_core::{validation, CutoffPolicy, Request, Verdict};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::config::GuardConfig;
use crate::error::GuardResult;
use crate::payload::BookingPayload;

#[derive(Debug, Clone)]
pub struct SubmissionGuard<C = SystemClock> {
    policy: CutoffPolicy,
    clock: C,
}

impl SubmissionGuard<SystemClock> {
    /// Guard on the real clock, shifted to the configured local offset.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.policy, SystemClock::new(config.utc_offset))
    }
}

impl<C: Clock> SubmissionGuard<C> {
    pub fn new(policy: CutoffPolicy, clock: C) -> Self {
        Self { policy, clock }
    }

    pub fn policy(&self) -> &CutoffPolicy {
        &self.policy
    }

    /// Check the payload and return the engine's verdict.
    ///
    /// A denial is `Ok` with `allowed == false`; only unusable payloads
    /// produce an error.
    pub fn evaluate(&self, payload: &BookingPayload) -> GuardResult<Verdict> {
        let request = self.admit(payload)?;
        Ok(self.verdict_for(&request))
    }

    /// Decode a JSON body and evaluate it.
    pub fn evaluate_json(&self, body: &str) -> GuardResult<Verdict> {
        let payload: BookingPayload = serde_json::from_str(body)?;
        self.evaluate(&payload)
    }

    /// Check the payload and reject it if the engine denies it.
    ///
    /// On success returns the typed request, ready to be persisted.
    pub fn enforce(&self, payload: &BookingPayload) -> GuardResult<Request> {
        let request = self.admit(payload)?;
        let verdict = self.verdict_for(&request);
        if !verdict.allowed {
            tracing::info!(
                kind = %request.kind(),
                code = ?verdict.denial.map(|d| d.code()),
                reason = %verdict.reason,
                "Booking rejected by submission guard"
            );
        }
        verdict.into_result()?;
        Ok(request)
    }

    /// First date within `horizon_days` on which this payload could be booked.
    pub fn earliest_bookable_date(
        &self,
        payload: &BookingPayload,
        horizon_days: u32,
    ) -> GuardResult<Option<NaiveDate>> {
        let request = self.admit(payload)?;
        Ok(validation::earliest_bookable_date_with_policy(
            &request,
            self.clock.now(),
            horizon_days,
            &self.policy,
        ))
    }

    fn admit(&self, payload: &BookingPayload) -> GuardResult<Request> {
        payload.validate()?;
        payload.to_request()
    }

    fn verdict_for(&self, request: &Request) -> Verdict {
        let now = self.clock.now();
        let verdict = validation::validate_with_policy(request, now, &self.policy);
        tracing::debug!(
            kind = %request.kind(),
            %now,
            allowed = verdict.allowed,
            code = ?verdict.denial.map(|d| d.code()),
            "Evaluated booking request"
        );
        verdict
    }
}
