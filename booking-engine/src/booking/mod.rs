//! Booking assessment
//!
//! Combines payment resolution and policy evaluation into the single view a
//! booking detail screen needs: what is owed, and whether the guest may
//! cancel or reschedule (free, with a fee, or not at all).

use crate::core::EngineConfig;
use crate::money::non_negative;
use crate::payment::{PaymentResolution, resolve_payment_status};
use crate::policy::{PolicyEvaluation, PolicyEvaluator};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingRecord, HotelPolicy, PaymentStatus, RefundStatus};

/// Why an action cannot be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    BookingCancelled,
    BookingRefunded,
    CheckInPassed,
    MissingCheckIn,
    RescheduleDisabled,
}

impl UnavailableReason {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            UnavailableReason::BookingCancelled => ErrorCode::BookingAlreadyCancelled,
            UnavailableReason::BookingRefunded => ErrorCode::BookingAlreadyRefunded,
            UnavailableReason::CheckInPassed => ErrorCode::CheckInPassed,
            UnavailableReason::MissingCheckIn => ErrorCode::InvalidStayDates,
            UnavailableReason::RescheduleDisabled => ErrorCode::RescheduleNotAllowed,
        }
    }
}

/// Whether a cancel / reschedule action is available, and at what cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionGate {
    Free,
    WithFee {
        #[serde(rename = "feePercent")]
        fee_percent: Decimal,
    },
    Unavailable { reason: UnavailableReason },
}

impl ActionGate {
    pub fn is_available(&self) -> bool {
        !matches!(self, ActionGate::Unavailable { .. })
    }

    pub fn is_free(&self) -> bool {
        matches!(self, ActionGate::Free)
    }

    /// Error for callers that want to reject an unavailable action
    pub fn ensure_available(&self) -> AppResult<()> {
        match self {
            ActionGate::Unavailable { reason } => {
                Err(AppError::new(reason.error_code()).with_detail("reason", format!("{reason:?}")))
            }
            _ => Ok(()),
        }
    }
}

/// Everything a booking view shows about money and eligibility
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAssessment {
    pub payment: PaymentResolution,
    /// `None` when the booking has no usable check-in date
    pub policy: Option<PolicyEvaluation>,
    pub cancellation: ActionGate,
    pub reschedule: ActionGate,
    pub refund_amount: Decimal,
    pub refund_status: Option<RefundStatus>,
}

/// Assess a booking snapshot at `now`
///
/// A policy snapshotted on the booking wins over the hotel's current policy;
/// missing policies fall back to the configured defaults.
pub fn assess_booking(
    record: &BookingRecord,
    hotel: Option<&HotelPolicy>,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> BookingAssessment {
    let payment = resolve_payment_status(record);

    let cancellation_policy = record
        .cancellation_policy
        .as_ref()
        .or_else(|| hotel.and_then(|h| h.cancellation_policy.as_ref()));
    let reschedule_policy = record
        .reschedule_policy
        .as_ref()
        .or_else(|| hotel.and_then(|h| h.reschedule_policy.as_ref()));

    let evaluator = PolicyEvaluator::new(config.policy_defaults);
    let policy = record.check_in.as_ref().map(|check_in| {
        evaluator.evaluate_at(
            check_in,
            now,
            config.timezone,
            cancellation_policy,
            reschedule_policy,
        )
    });

    let (cancellation, reschedule) = match (closed_reason(record.payment_status), &policy) {
        (Some(reason), _) => (unavailable(reason), unavailable(reason)),
        (None, None) => {
            tracing::debug!(booking = record.log_id(), "Booking has no usable check-in date");
            let gate = unavailable(UnavailableReason::MissingCheckIn);
            (gate, gate)
        }
        (None, Some(eval)) if eval.days_until_check_in < 0 => {
            let gate = unavailable(UnavailableReason::CheckInPassed);
            (gate, gate)
        }
        (None, Some(eval)) => (cancellation_gate(eval), reschedule_gate(eval)),
    };

    BookingAssessment {
        payment,
        policy,
        cancellation,
        reschedule,
        refund_amount: non_negative(record.refund_amount),
        refund_status: record.refund_status,
    }
}

fn closed_reason(status: Option<PaymentStatus>) -> Option<UnavailableReason> {
    let status = status.filter(PaymentStatus::is_closed)?;
    Some(match status {
        PaymentStatus::Refunded => UnavailableReason::BookingRefunded,
        _ => UnavailableReason::BookingCancelled,
    })
}

fn unavailable(reason: UnavailableReason) -> ActionGate {
    ActionGate::Unavailable { reason }
}

// Non-refundable bookings forfeit the full amount on cancellation
fn cancellation_gate(eval: &PolicyEvaluation) -> ActionGate {
    if !eval.refundable {
        ActionGate::WithFee {
            fee_percent: Decimal::ONE_HUNDRED,
        }
    } else if eval.can_cancel_free {
        ActionGate::Free
    } else {
        ActionGate::WithFee {
            fee_percent: eval.cancel_fee_percent,
        }
    }
}

fn reschedule_gate(eval: &PolicyEvaluation) -> ActionGate {
    if !eval.reschedule_allowed {
        unavailable(UnavailableReason::RescheduleDisabled)
    } else if eval.can_reschedule_free {
        ActionGate::Free
    } else {
        ActionGate::WithFee {
            fee_percent: eval.reschedule_fee_percent,
        }
    }
}
