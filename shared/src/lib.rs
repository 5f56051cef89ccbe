//! Shared types for the booking engine
//!
//! Wire models for booking snapshots, hotel policies and coupon outcomes,
//! lenient deserialization helpers, and the unified error system.

pub mod error;
pub mod models;
pub mod serde_helpers;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    BookingRecord, CancellationPolicy, CouponOutcome, CouponRequest, HotelPolicy, PaymentStatus,
    RefundStatus, ReschedulePolicy, StayDate,
};
