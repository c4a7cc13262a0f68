//! Wall-clock access for the confirmation view.
//!
//! In the browser this reads `Date.now()` and the local timezone offset so
//! the delivery date matches the shopper's calendar. Elsewhere it is UTC.

use time::OffsetDateTime;

pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        // `getTimezoneOffset` is positive west of UTC.
        #[allow(clippy::cast_possible_truncation)]
        let (millis, offset_minutes) = (date.get_time() as i64, -(date.get_timezone_offset() as i32));
        storefront::order::from_unix_millis(millis, offset_minutes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}
