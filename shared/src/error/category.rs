//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Booking errors
/// - 6xxx: Promotion errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Booking errors (4xxx)
    Booking,
    /// Promotion errors (6xxx)
    Promotion,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Booking,
            6000..7000 => Self::Promotion,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Booking => "booking",
            Self::Promotion => "promotion",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(6), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(4002), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(6006), ErrorCategory::Promotion);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::InvalidFormat.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::CheckInPassed.category(), ErrorCategory::Booking);
        assert_eq!(
            ErrorCode::PromotionInconsistent.category(),
            ErrorCategory::Promotion
        );
        assert_eq!(ErrorCode::NetworkError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Promotion).unwrap();
        assert_eq!(json, "\"promotion\"");

        let category: ErrorCategory = serde_json::from_str("\"booking\"").unwrap();
        assert_eq!(category, ErrorCategory::Booking);
        assert_eq!(category.name(), "booking");
    }
}
