//! Lenient serde helpers for upstream booking snapshots
//!
//! Snapshots come from several generations of the booking backend. Fields can
//! be missing, `null`, numeric strings, or simply the wrong type. Every helper
//! here maps anything it cannot understand to `None` instead of failing the
//! whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a JSON value as a finite f64 (numbers or numeric strings)
pub fn value_to_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Parse a JSON value as an integer; floats are accepted only when whole
pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Parse a JSON value as a bool (`true`/`false` or their string forms)
pub fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a JSON value as an identifier-like string; numbers are stringified, blanks dropped
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deserialize Option<String>, accepting numbers and treating blanks as None
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|opt| opt.as_ref().and_then(value_to_string))
}

/// Deserialize Option<f64>, treating null, wrong types and non-finite values as None
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|opt| opt.as_ref().and_then(value_to_f64))
}

/// Deserialize Option<i64>, treating null and wrong types as None
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|opt| opt.as_ref().and_then(value_to_i64))
}

/// Deserialize Option<bool>, treating null and wrong types as None
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|opt| opt.as_ref().and_then(value_to_bool))
}

/// Deserialize any `T`, degrading to None when the value does not fit
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<Value>::deserialize(deserializer).map(|opt| {
        opt.filter(|v| !v.is_null())
            .and_then(|v| match serde_json::from_value(v.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::trace!(value = %v, error = %e, "Dropping malformed snapshot field");
                    None
                }
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_f64() {
        assert_eq!(value_to_f64(&json!(12.5)), Some(12.5));
        assert_eq!(value_to_f64(&json!("500000")), Some(500_000.0));
        assert_eq!(value_to_f64(&json!(" 42.1 ")), Some(42.1));
        assert_eq!(value_to_f64(&json!("NaN")), None);
        assert_eq!(value_to_f64(&json!("inf")), None);
        assert_eq!(value_to_f64(&json!("abc")), None);
        assert_eq!(value_to_f64(&json!(true)), None);
        assert_eq!(value_to_f64(&json!({"amount": 1})), None);
    }

    #[test]
    fn test_value_to_i64() {
        assert_eq!(value_to_i64(&json!(3)), Some(3));
        assert_eq!(value_to_i64(&json!(-2)), Some(-2));
        assert_eq!(value_to_i64(&json!(3.0)), Some(3));
        assert_eq!(value_to_i64(&json!(3.5)), None);
        assert_eq!(value_to_i64(&json!("7")), Some(7));
        assert_eq!(value_to_i64(&json!("7.0")), Some(7));
        assert_eq!(value_to_i64(&json!("seven")), None);
        assert_eq!(value_to_i64(&json!(null)), None);
    }

    #[test]
    fn test_value_to_bool() {
        assert_eq!(value_to_bool(&json!(false)), Some(false));
        assert_eq!(value_to_bool(&json!("TRUE")), Some(true));
        assert_eq!(value_to_bool(&json!("no")), None);
        assert_eq!(value_to_bool(&json!(0)), None);
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!(" BK-001 ")), Some("BK-001".to_string()));
        assert_eq!(value_to_string(&json!(1024)), Some("1024".to_string()));
        assert_eq!(value_to_string(&json!("   ")), None);
        assert_eq!(value_to_string(&json!([1])), None);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i64")]
        nights: Option<i64>,
        #[serde(default, deserialize_with = "lenient")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_lenient_fields_never_fail_the_record() {
        let probe: Probe =
            serde_json::from_value(json!({"amount": "oops", "nights": [], "tags": 5})).unwrap();
        assert_eq!(probe.amount, None);
        assert_eq!(probe.nights, None);
        assert_eq!(probe.tags, None);

        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(probe.amount, None);

        let probe: Probe =
            serde_json::from_value(json!({"amount": 99.5, "nights": "2", "tags": ["a"]}))
                .unwrap();
        assert_eq!(probe.amount, Some(99.5));
        assert_eq!(probe.nights, Some(2));
        assert_eq!(probe.tags, Some(vec!["a".to_string()]));
    }
}
