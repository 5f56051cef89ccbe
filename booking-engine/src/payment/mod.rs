//! Payment status resolution
//!
//! The function booking views actually call. It prefers the authoritative
//! `totalAmount`/`paidAmount` pair, falls back to the line-item breakdown for
//! legacy records, and reconciles the result against the backend's
//! `paymentStatus` flag.
//!
//! Guarantees for every input: `total ≥ 0`, `0 ≤ paid ≤ total`,
//! `outstanding = total − paid`.

pub mod legacy;

use crate::money::{calc_money, saturating_sub, to_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::BookingRecord;

pub use legacy::LegacyCorrection;

/// Payment badge shown for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Paid,
    Partial,
    Unpaid,
}

/// Where the total/paid pair came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountSource {
    /// `totalAmount` and `paidAmount` were both present
    Recorded,
    /// Derived from line items via [`calc_money`]
    Derived,
}

/// Reconciled payment state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResolution {
    pub total: Decimal,
    pub paid: Decimal,
    pub outstanding: Decimal,
    pub status: SettlementStatus,
    pub source: AmountSource,
    /// Legacy rule that rewrote `paid`, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<LegacyCorrection>,
}

/// Resolve total, paid, outstanding and status for a booking snapshot
pub fn resolve_payment_status(record: &BookingRecord) -> PaymentResolution {
    let flag = record.payment_status;

    // 1. Recorded amounts win; otherwise derive from line items
    let (total, paid, source, derived_correction) =
        match (record.total_amount, record.paid_amount) {
            (Some(total), Some(paid)) => {
                (to_money(Some(total)), to_money(Some(paid)), AmountSource::Recorded, None)
            }
            _ => {
                let money = calc_money(record);
                let (paid, correction) =
                    legacy::paid_without_amount(flag, record.paid_amount, money.total, money.paid);
                (money.total, paid, AmountSource::Derived, correction)
            }
        };

    // 2. Clamp
    let total = total.max(Decimal::ZERO);
    let paid = paid.clamp(Decimal::ZERO, total);

    // 3-4. Trust the status flag over a zero amount
    let (paid, flag_correction) = legacy::trust_status_flag(flag, total, paid);
    let correction = derived_correction.or(flag_correction);

    if let Some(correction) = correction {
        tracing::debug!(
            booking = record.log_id(),
            ?correction,
            total = %total,
            "Applied legacy payment correction"
        );
    }

    // 5-6.
    let outstanding = (total - paid).max(Decimal::ZERO);
    let status = derive_status(total, paid);

    PaymentResolution {
        total,
        paid,
        outstanding,
        status,
        source,
        correction,
    }
}

/// Status as a function of (total, paid) alone; first match wins
///
/// A zero-total booking is reported as paid: there is nothing to collect.
pub fn derive_status(total: Decimal, paid: Decimal) -> SettlementStatus {
    let outstanding = saturating_sub(total, paid).max(Decimal::ZERO);
    let has_total = total > Decimal::ZERO;

    if outstanding.is_zero() && has_total {
        SettlementStatus::Paid
    } else if paid.is_zero() && has_total {
        SettlementStatus::Unpaid
    } else if outstanding > Decimal::ZERO {
        SettlementStatus::Partial
    } else {
        SettlementStatus::Paid
    }
}
