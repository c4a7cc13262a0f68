//! Simulated order confirmation derived from the activation timestamp.
//!
//! TRADE-OFFS
//! ==========
//! The order id is the trailing eight digits of the activation time in
//! milliseconds. Two activations within the same millisecond (or exactly
//! 10^8 ms apart) collide; a real checkout must use a backend-issued id.

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

pub const ORDER_ID_PREFIX: &str = "ORD-";
pub const ORDER_ID_DIGITS: usize = 8;
pub const DELIVERY_OFFSET_DAYS: i64 = 3;

/// Confirmation values generated once per view activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub placed_at: OffsetDateTime,
    pub estimated_delivery: Date,
    /// Long-form label, e.g. `"Friday, February 2, 2024"`.
    pub estimated_delivery_label: String,
}

impl OrderConfirmation {
    /// Synthesize a confirmation for an activation at `now`.
    #[must_use]
    pub fn generate(now: OffsetDateTime) -> Self {
        Self::restore(order_id_for(now), now)
    }

    /// Rebuild a confirmation from a known id and placement time.
    #[must_use]
    pub fn restore(order_id: String, placed_at: OffsetDateTime) -> Self {
        let estimated_delivery = estimated_delivery(placed_at.date());
        Self { order_id, placed_at, estimated_delivery, estimated_delivery_label: delivery_label(estimated_delivery) }
    }
}

/// `ORD-` followed by the last eight digits of `now` in unix milliseconds.
#[must_use]
pub fn order_id_for(now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let suffix = millis.rem_euclid(100_000_000);
    format!("{ORDER_ID_PREFIX}{suffix:08}")
}

/// True for `ORD-` followed by exactly eight ASCII digits.
#[must_use]
pub fn is_order_id(raw: &str) -> bool {
    raw.strip_prefix(ORDER_ID_PREFIX)
        .is_some_and(|digits| digits.len() == ORDER_ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Calendar date three days after `placed`. Saturates at the last representable date.
#[must_use]
pub fn estimated_delivery(placed: Date) -> Date {
    placed.checked_add(Duration::days(DELIVERY_OFFSET_DAYS)).unwrap_or(Date::MAX)
}

/// Format as `Weekday, Month D, YYYY`.
#[must_use]
pub fn delivery_label(date: Date) -> String {
    date.format(format_description!("[weekday], [month repr:long] [day padding:none], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Build a timestamp from unix milliseconds shifted to a local offset in minutes.
///
/// Out-of-range inputs clamp to the unix epoch and an invalid offset falls back to UTC.
#[must_use]
pub fn from_unix_millis(millis: i64, offset_minutes: i32) -> OffsetDateTime {
    let utc = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(|secs| UtcOffset::from_whole_seconds(secs).ok())
        .unwrap_or(UtcOffset::UTC);
    utc.to_offset(offset)
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
