//! 时间工具函数 — 业务时区转换
//!
//! Eligibility windows count calendar days in the hotel's business timezone,
//! never elapsed hours, so DST shifts cannot produce off-by-one day counts.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parse an IANA timezone name (e.g. `Asia/Ho_Chi_Minh`)
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Calendar date of an instant in the business timezone
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
