//! Data models
//!
//! Snapshots consumed by the booking engine. Nothing here is ever mutated by
//! the engine; monetary state lives upstream and is fetched fresh per read.

pub mod booking;
pub mod policy;
pub mod promotion;
pub mod stay_date;

pub use booking::{BookingRecord, PaymentStatus, RefundStatus};
pub use policy::{CancellationPolicy, HotelPolicy, ReschedulePolicy};
pub use promotion::{CouponOutcome, CouponRequest};
pub use stay_date::StayDate;
