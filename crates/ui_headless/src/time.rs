//! Clock helpers shared by timers and id generation.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns today's calendar date (UTC) derived from [`unix_time_ms_now`].
pub fn today() -> chrono::NaiveDate {
    chrono::DateTime::from_timestamp_millis(unix_time_ms_now() as i64)
        .map(|now| now.date_naive())
        .unwrap_or_default()
}
