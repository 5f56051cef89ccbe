//! Hotel cancellation / reschedule policy models

use crate::serde_helpers;
use serde::{Deserialize, Serialize};

/// Cancellation policy (attached to a hotel, or snapshotted on a booking)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationPolicy {
    /// Days before check-in during which cancellation is free
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub free_cancellation_days: Option<i64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub refundable: Option<bool>,
    /// Cancellation fee percent (0-100)
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancellation_fee: Option<f64>,
}

/// Reschedule policy
///
/// Missing fields fall back to `{freeRescheduleDays: 3, rescheduleFee: 0, allowed: true}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReschedulePolicy {
    /// Days before check-in during which rescheduling is free
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub free_reschedule_days: Option<i64>,
    /// Reschedule fee percent (0-100)
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub reschedule_fee: Option<f64>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed: Option<bool>,
}

/// Policy block fetched alongside a hotel/room record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPolicy {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hotel_policy_deserialize() {
        let policy: HotelPolicy = serde_json::from_value(json!({
            "cancellationPolicy": {"freeCancellationDays": 3, "refundable": true, "cancellationFee": 20},
            "reschedulePolicy": {"freeRescheduleDays": 5, "rescheduleFee": 10, "allowed": false}
        }))
        .unwrap();

        let cancel = policy.cancellation_policy.unwrap();
        assert_eq!(cancel.free_cancellation_days, Some(3));
        assert_eq!(cancel.refundable, Some(true));
        assert_eq!(cancel.cancellation_fee, Some(20.0));

        let reschedule = policy.reschedule_policy.unwrap();
        assert_eq!(reschedule.free_reschedule_days, Some(5));
        assert_eq!(reschedule.reschedule_fee, Some(10.0));
        assert_eq!(reschedule.allowed, Some(false));
    }

    #[test]
    fn test_malformed_policy_fields_become_absent() {
        let policy: HotelPolicy = serde_json::from_value(json!({
            "cancellationPolicy": {"freeCancellationDays": "three", "refundable": "maybe"},
            "reschedulePolicy": "flexible"
        }))
        .unwrap();

        let cancel = policy.cancellation_policy.unwrap();
        assert_eq!(cancel.free_cancellation_days, None);
        assert_eq!(cancel.refundable, None);
        assert!(policy.reschedule_policy.is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let policy = ReschedulePolicy {
            allowed: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&policy).unwrap(), json!({"allowed": true}));
    }
}
