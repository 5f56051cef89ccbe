//! Property tests for payment resolution
//!
//! For any booking snapshot, however malformed, the resolved amounts must be
//! internally consistent.

use booking_engine::{SettlementStatus, payment::derive_status, resolve_payment_status};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::{BookingRecord, PaymentStatus};

fn amount() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        (-1_000_000.0..100_000_000.0f64).prop_map(Some),
        (0u32..20_000_000u32).prop_map(|v| Some(f64::from(v))),
    ]
}

fn status() -> impl Strategy<Value = Option<PaymentStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(PaymentStatus::Pending)),
        Just(Some(PaymentStatus::Paid)),
        Just(Some(PaymentStatus::Partial)),
        Just(Some(PaymentStatus::Cancelled)),
        Just(Some(PaymentStatus::Refunded)),
        Just(Some(PaymentStatus::Unknown)),
    ]
}

prop_compose! {
    fn booking()(
        price_per_night in amount(),
        nights in prop::option::of(-3i64..60),
        change_fee_amount in amount(),
        surcharge_amount in amount(),
        discount_amount in amount(),
        paid_amount in amount(),
        total_amount in amount(),
        payment_status in status(),
    ) -> BookingRecord {
        BookingRecord {
            price_per_night,
            nights,
            change_fee_amount,
            surcharge_amount,
            discount_amount,
            paid_amount,
            total_amount,
            payment_status,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn amounts_are_consistent(record in booking()) {
        let r = resolve_payment_status(&record);
        prop_assert!(r.total >= Decimal::ZERO);
        prop_assert!(r.paid >= Decimal::ZERO);
        prop_assert!(r.paid <= r.total);
        prop_assert_eq!(r.outstanding, r.total - r.paid);
    }

    #[test]
    fn resolution_is_idempotent(record in booking()) {
        prop_assert_eq!(resolve_payment_status(&record), resolve_payment_status(&record));
    }

    #[test]
    fn status_depends_only_on_total_and_paid(record in booking()) {
        let r = resolve_payment_status(&record);
        prop_assert_eq!(r.status, derive_status(r.total, r.paid));
    }

    #[test]
    fn settled_bookings_have_nothing_outstanding(record in booking()) {
        let r = resolve_payment_status(&record);
        if r.status == SettlementStatus::Paid {
            prop_assert!(r.outstanding.is_zero());
        } else {
            prop_assert!(r.outstanding > Decimal::ZERO);
        }
    }
}
