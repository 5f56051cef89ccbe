//! Unified error system for the booking engine
//!
//! This module provides the error handling used at the engine boundary:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! The reconciliation functions themselves never fail; errors only appear
//! when parsing snapshots, loading configuration, or talking to
//! collaborators such as the coupon service.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 6xxx: Promotion errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CheckInPassed);
//! assert_eq!(err.message, "Check-in date has already passed");
//!
//! let err = AppError::promotion_rejected("Code expired").with_detail("code", "SUMMER24");
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
