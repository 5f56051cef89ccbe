//! Money calculation utilities using rust_decimal for precision
//!
//! Booking snapshots carry amounts as `f64`. Every calculation here converts
//! to `Decimal` first and keeps full precision; rounding to 2 decimal places
//! happens only when a value goes back to `f64` for display. Nothing here
//! fails: missing or non-finite amounts count as zero and overflow saturates.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::BookingRecord;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for the wire, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Optional wire amount as a Decimal (missing → 0), not rounded
#[inline]
pub fn to_money(value: Option<f64>) -> Decimal {
    value.map(to_decimal).unwrap_or_default()
}

/// Optional wire amount clamped to ≥ 0
///
/// A negative fee or discount is treated as zero, never as a charge or
/// credit in the opposite direction.
#[inline]
pub fn non_negative(value: Option<f64>) -> Decimal {
    to_money(value).max(Decimal::ZERO)
}

fn saturate(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturate(a.is_sign_negative()))
}

pub(crate) fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturate(a.is_sign_negative()))
}

pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| saturate(a.is_sign_negative() != b.is_sign_negative()))
}

/// Monetary breakdown derived from a booking's line items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBreakdown {
    pub price_per_night: Decimal,
    pub nights: i64,
    /// price_per_night × nights
    pub room_total: Decimal,
    pub change_fee: Decimal,
    pub surcharge: Decimal,
    pub discount: Decimal,
    /// room_total + change_fee + surcharge − discount, never below zero
    pub total: Decimal,
    pub paid: Decimal,
    /// paid ≥ total and total > 0
    pub is_paid: bool,
}

/// Calculate the monetary breakdown of a booking from its line items
///
/// Formula: max(price_per_night × nights + change_fee + surcharge − discount, 0)
///
/// A zero-total booking is never reported as paid here; the payment status
/// resolver handles that case.
pub fn calc_money(record: &BookingRecord) -> MoneyBreakdown {
    let price_per_night = to_money(record.price_per_night);
    let nights = record.nights.unwrap_or(0).max(0);
    let room_total = saturating_mul(price_per_night, Decimal::from(nights));

    let change_fee = non_negative(record.change_fee_amount);
    let surcharge = non_negative(record.surcharge_amount);
    let discount = non_negative(record.discount_amount);

    let gross = saturating_add(saturating_add(room_total, change_fee), surcharge);
    let total = saturating_sub(gross, discount).max(Decimal::ZERO);

    let paid = non_negative(record.paid_amount);
    let is_paid = paid >= total && total > Decimal::ZERO;

    MoneyBreakdown {
        price_per_night,
        nights,
        room_total,
        change_fee,
        surcharge,
        discount,
        total,
        paid,
        is_paid,
    }
}
