//! Coupon application request/response models

use crate::serde_helpers;
use serde::{Deserialize, Serialize};

/// Request sent to the coupon-application service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRequest {
    pub code: String,
    pub total_amount: f64,
}

/// Result returned by the coupon-application service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponOutcome {
    #[serde(default, deserialize_with = "serde_helpers::lenient_bool")]
    pub success: Option<bool>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
}

impl CouponOutcome {
    /// The service explicitly reported success
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_deserialize() {
        let outcome: CouponOutcome = serde_json::from_value(json!({
            "success": true,
            "promotionId": 17,
            "code": "AUTUMN10",
            "discount": 150000,
            "finalAmount": 1350000,
            "message": "Applied"
        }))
        .unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.promotion_id.as_deref(), Some("17"));
        assert_eq!(outcome.discount, Some(150_000.0));
        assert_eq!(outcome.final_amount, Some(1_350_000.0));
    }

    #[test]
    fn test_outcome_missing_success_is_failure() {
        let outcome: CouponOutcome =
            serde_json::from_value(json!({"message": "Code expired"})).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_outcome_tolerates_malformed_message() {
        let outcome: CouponOutcome = serde_json::from_value(json!({
            "success": false,
            "message": {"text": "Code expired"}
        }))
        .unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, None);

        let outcome: CouponOutcome =
            serde_json::from_value(json!({"success": false, "message": 404})).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("404"));
    }

    #[test]
    fn test_request_serialize() {
        let request = CouponRequest {
            code: "AUTUMN10".to_string(),
            total_amount: 1_500_000.0,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"code": "AUTUMN10", "totalAmount": 1500000.0})
        );
    }
}
