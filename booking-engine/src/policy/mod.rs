//! Cancellation / reschedule eligibility
//!
//! Free windows are counted in whole calendar days between "today" and the
//! check-in date. The threshold is inclusive: a booking exactly
//! `freeCancellationDays` days away can still be cancelled for free.
//! Policy fields that are missing or malformed fall back to
//! [`PolicyDefaults`].

use crate::money::to_decimal;
use crate::utils::time::{days_between, local_date};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{CancellationPolicy, ReschedulePolicy, StayDate};

/// Free cancellation window when the policy does not specify one
pub const DEFAULT_FREE_CANCELLATION_DAYS: i64 = 1;

/// Free reschedule window when the policy does not specify one
pub const DEFAULT_FREE_RESCHEDULE_DAYS: i64 = 3;

const MAX_FEE_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Day thresholds applied when a policy field is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDefaults {
    pub free_cancellation_days: i64,
    pub free_reschedule_days: i64,
}

impl Default for PolicyDefaults {
    fn default() -> Self {
        Self {
            free_cancellation_days: DEFAULT_FREE_CANCELLATION_DAYS,
            free_reschedule_days: DEFAULT_FREE_RESCHEDULE_DAYS,
        }
    }
}

/// Eligibility of a booking for free cancellation / rescheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyEvaluation {
    /// Calendar days until check-in (negative once check-in has passed)
    pub days_until_check_in: i64,
    pub can_cancel_free: bool,
    pub can_reschedule_free: bool,
    /// Fee percent charged outside the free window (0-100)
    pub cancel_fee_percent: Decimal,
    pub reschedule_fee_percent: Decimal,
    pub refundable: bool,
    pub reschedule_allowed: bool,
}

/// Evaluates hotel policies against a check-in date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyEvaluator {
    defaults: PolicyDefaults,
}

impl PolicyEvaluator {
    pub fn new(defaults: PolicyDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> PolicyDefaults {
        self.defaults
    }

    /// Evaluate with both dates already expressed as calendar days
    pub fn evaluate(
        &self,
        check_in: NaiveDate,
        today: NaiveDate,
        cancellation: Option<&CancellationPolicy>,
        reschedule: Option<&ReschedulePolicy>,
    ) -> PolicyEvaluation {
        let days = days_between(today, check_in);

        let free_cancellation_days = day_threshold(
            "freeCancellationDays",
            cancellation.and_then(|p| p.free_cancellation_days),
            self.defaults.free_cancellation_days,
        );
        let free_reschedule_days = day_threshold(
            "freeRescheduleDays",
            reschedule.and_then(|p| p.free_reschedule_days),
            self.defaults.free_reschedule_days,
        );
        let reschedule_allowed = reschedule.and_then(|p| p.allowed) != Some(false);

        PolicyEvaluation {
            days_until_check_in: days,
            can_cancel_free: days >= free_cancellation_days,
            can_reschedule_free: reschedule_allowed && days >= free_reschedule_days,
            cancel_fee_percent: fee_percent(
                "cancellationFee",
                cancellation.and_then(|p| p.cancellation_fee),
            ),
            reschedule_fee_percent: fee_percent(
                "rescheduleFee",
                reschedule.and_then(|p| p.reschedule_fee),
            ),
            refundable: cancellation.and_then(|p| p.refundable).unwrap_or(true),
            reschedule_allowed,
        }
    }

    /// Evaluate from a raw check-in value and the current instant
    ///
    /// Both sides are reduced to calendar dates in `tz` first.
    pub fn evaluate_at(
        &self,
        check_in: &StayDate,
        now: DateTime<Utc>,
        tz: Tz,
        cancellation: Option<&CancellationPolicy>,
        reschedule: Option<&ReschedulePolicy>,
    ) -> PolicyEvaluation {
        self.evaluate(
            check_in.local_date(tz),
            local_date(now, tz),
            cancellation,
            reschedule,
        )
    }
}

/// Evaluate with the built-in defaults (1 day cancel, 3 days reschedule)
pub fn evaluate_policy(
    check_in: NaiveDate,
    today: NaiveDate,
    cancellation: Option<&CancellationPolicy>,
    reschedule: Option<&ReschedulePolicy>,
) -> PolicyEvaluation {
    PolicyEvaluator::default().evaluate(check_in, today, cancellation, reschedule)
}

/// [`evaluate_policy`] from a raw check-in value and the current instant
pub fn evaluate_policy_at(
    check_in: &StayDate,
    now: DateTime<Utc>,
    tz: Tz,
    cancellation: Option<&CancellationPolicy>,
    reschedule: Option<&ReschedulePolicy>,
) -> PolicyEvaluation {
    PolicyEvaluator::default().evaluate_at(check_in, now, tz, cancellation, reschedule)
}

fn day_threshold(field: &'static str, value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(days) if days >= 0 => days,
        Some(days) => {
            tracing::warn!(field, days, default, "Negative policy day count, using default");
            default
        }
        None => default,
    }
}

fn fee_percent(field: &'static str, value: Option<f64>) -> Decimal {
    let Some(raw) = value else {
        return Decimal::ZERO;
    };
    let percent = to_decimal(raw);
    if raw.is_finite() && (Decimal::ZERO..=MAX_FEE_PERCENT).contains(&percent) {
        percent
    } else {
        tracing::warn!(field, raw, "Fee percent out of range, using 0");
        Decimal::ZERO
    }
}
