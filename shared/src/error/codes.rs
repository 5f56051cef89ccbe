//! Unified error codes for the booking engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 6xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 4xxx: Booking ====================
    /// Booking has already been cancelled
    BookingAlreadyCancelled = 4002,
    /// Booking has already been refunded
    BookingAlreadyRefunded = 4003,
    /// Check-in date has already passed
    CheckInPassed = 4004,
    /// Hotel does not allow rescheduling
    RescheduleNotAllowed = 4005,
    /// Booking has no usable stay dates
    InvalidStayDates = 4006,

    // ==================== 6xxx: Promotion ====================
    /// Promotion rejected by the coupon service
    PromotionRejected = 6003,
    /// Promotion result does not match the booking total
    PromotionInconsistent = 6005,
    /// Promotion service unavailable
    PromotionServiceUnavailable = 6006,

    // ==================== 9xxx: System ====================
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric error code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "Invalid format",

            // Booking
            ErrorCode::BookingAlreadyCancelled => "Booking has already been cancelled",
            ErrorCode::BookingAlreadyRefunded => "Booking has already been refunded",
            ErrorCode::CheckInPassed => "Check-in date has already passed",
            ErrorCode::RescheduleNotAllowed => "Rescheduling is not allowed for this hotel",
            ErrorCode::InvalidStayDates => "Booking has no valid stay dates",

            // Promotion
            ErrorCode::PromotionRejected => "Promotion cannot be applied",
            ErrorCode::PromotionInconsistent => "Promotion result does not match booking total",
            ErrorCode::PromotionServiceUnavailable => "Promotion service is unavailable",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(ErrorCode::InvalidFormat),

            // Booking
            4002 => Ok(ErrorCode::BookingAlreadyCancelled),
            4003 => Ok(ErrorCode::BookingAlreadyRefunded),
            4004 => Ok(ErrorCode::CheckInPassed),
            4005 => Ok(ErrorCode::RescheduleNotAllowed),
            4006 => Ok(ErrorCode::InvalidStayDates),

            // Promotion
            6003 => Ok(ErrorCode::PromotionRejected),
            6005 => Ok(ErrorCode::PromotionInconsistent),
            6006 => Ok(ErrorCode::PromotionServiceUnavailable),

            // System
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
