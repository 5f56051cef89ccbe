//! Booking snapshot model
//!
//! Read-only view of a booking as returned by the booking backend. Every
//! field is optional: older records predate `totalAmount`/`paidAmount`
//! tracking and some fields are occasionally sent with the wrong type.

use super::policy::{CancellationPolicy, ReschedulePolicy};
use super::stay_date::StayDate;
use crate::error::{AppError, AppResult};
use crate::serde_helpers;
use serde::{Deserialize, Serialize};

/// Payment status flag set by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Cancelled,
    Refunded,
    /// Any status string this engine does not know about
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Booking no longer accepts changes (cancelled or refunded)
    pub fn is_closed(&self) -> bool {
        matches!(self, PaymentStatus::Cancelled | PaymentStatus::Refunded)
    }
}

/// Refund status (display-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Full,
    Partial,
    None,
}

/// Booking snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(
        default,
        alias = "_id",
        alias = "id",
        deserialize_with = "serde_helpers::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_code: Option<String>,

    // === Line items ===
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_night: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub nights: Option<i64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_fee_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub surcharge_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_amount: Option<f64>,

    // === Authoritative amounts (absent on legacy records) ===
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_status: Option<PaymentStatus>,

    // === Stay ===
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_in: Option<StayDate>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out: Option<StayDate>,

    // === Refund (display-only) ===
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub refund_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub refund_status: Option<RefundStatus>,

    // === Policy snapshot taken at booking time ===
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancellation_policy: Option<CancellationPolicy>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub reschedule_policy: Option<ReschedulePolicy>,
}

impl BookingRecord {
    /// Parse a booking snapshot from JSON
    ///
    /// Only a non-object payload is an error; malformed fields degrade to `None`.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| AppError::invalid_format(format!("Invalid booking JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> AppResult<Self> {
        if !value.is_object() {
            return Err(AppError::invalid_format("Booking record must be a JSON object")
                .with_detail("found", json_kind(&value)));
        }
        serde_json::from_value(value)
            .map_err(|e| AppError::invalid_format(format!("Invalid booking record: {}", e)))
    }

    /// Identifier used for log context
    pub fn log_id(&self) -> &str {
        self.booking_code
            .as_deref()
            .or(self.booking_id.as_deref())
            .unwrap_or("-")
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
