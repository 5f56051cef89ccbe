//! Legacy compatibility for payment reconciliation
//!
//! Bookings written before `paidAmount` tracking existed carry a trustworthy
//! `paymentStatus` flag but a missing or zero paid amount. These rules trust
//! the flag over the number. Delete this module once historical records have
//! been backfilled with real amounts.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::PaymentStatus;

/// Which legacy rule rewrote the paid amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyCorrection {
    /// Flag says `paid`, record has no `paidAmount` at all
    PaidFlagWithoutAmount,
    /// Flag says `paid`, amount is zero
    PaidFlagOverZeroAmount,
    /// Flag says `refunded`, amount is zero; paid means "originally settled"
    RefundedOverZeroAmount,
}

/// Derived-path rule: a `paid` booking without any recorded paid amount was
/// settled in full.
pub fn paid_without_amount(
    status: Option<PaymentStatus>,
    paid_amount: Option<f64>,
    total: Decimal,
    paid: Decimal,
) -> (Decimal, Option<LegacyCorrection>) {
    if status == Some(PaymentStatus::Paid) && paid_amount.is_none() {
        return (total, Some(LegacyCorrection::PaidFlagWithoutAmount));
    }
    (paid, None)
}

/// Post-clamp rule: trust `paid`/`refunded` flags over a zero paid amount.
///
/// Refund amounts are tracked separately; here `paid` stays the amount that
/// was originally settled.
pub fn trust_status_flag(
    status: Option<PaymentStatus>,
    total: Decimal,
    paid: Decimal,
) -> (Decimal, Option<LegacyCorrection>) {
    if !paid.is_zero() || total <= Decimal::ZERO {
        return (paid, None);
    }
    match status {
        Some(PaymentStatus::Paid) => (total, Some(LegacyCorrection::PaidFlagOverZeroAmount)),
        Some(PaymentStatus::Refunded) => (total, Some(LegacyCorrection::RefundedOverZeroAmount)),
        _ => (paid, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_without_amount_fires_only_when_amount_missing() {
        let total = Decimal::from(800);
        assert_eq!(
            paid_without_amount(Some(PaymentStatus::Paid), None, total, Decimal::ZERO),
            (total, Some(LegacyCorrection::PaidFlagWithoutAmount))
        );
        assert_eq!(
            paid_without_amount(Some(PaymentStatus::Paid), Some(0.0), total, Decimal::ZERO),
            (Decimal::ZERO, None)
        );
        assert_eq!(
            paid_without_amount(Some(PaymentStatus::Pending), None, total, Decimal::ZERO),
            (Decimal::ZERO, None)
        );
    }

    #[test]
    fn test_trust_status_flag() {
        let total = Decimal::from(1_000);
        assert_eq!(
            trust_status_flag(Some(PaymentStatus::Paid), total, Decimal::ZERO),
            (total, Some(LegacyCorrection::PaidFlagOverZeroAmount))
        );
        assert_eq!(
            trust_status_flag(Some(PaymentStatus::Refunded), total, Decimal::ZERO),
            (total, Some(LegacyCorrection::RefundedOverZeroAmount))
        );
    }

    #[test]
    fn test_trust_status_flag_ignores_partial_amounts_and_zero_totals() {
        let total = Decimal::from(1_000);
        let partial = Decimal::from(300);
        assert_eq!(
            trust_status_flag(Some(PaymentStatus::Paid), total, partial),
            (partial, None)
        );
        assert_eq!(
            trust_status_flag(Some(PaymentStatus::Paid), Decimal::ZERO, Decimal::ZERO),
            (Decimal::ZERO, None)
        );
        for status in [
            None,
            Some(PaymentStatus::Pending),
            Some(PaymentStatus::Partial),
            Some(PaymentStatus::Cancelled),
            Some(PaymentStatus::Unknown),
        ] {
            assert_eq!(trust_status_flag(status, total, Decimal::ZERO), (Decimal::ZERO, None));
        }
    }
}
