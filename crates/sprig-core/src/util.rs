//! Shared utility functions used by the template helpers and the view.

use chrono::{Local, TimeZone};

/// Percentage of completed tasks, floored.
///
/// A note without tasks reports `0`; values above 100 are clamped.
pub fn progress_percent(completed: u32, all: u32) -> u32 {
    if all == 0 {
        return 0;
    }
    let percent = (u64::from(completed) * 100 / u64::from(all)).min(100);
    u32::try_from(percent).unwrap_or(100)
}

/// Format a Unix millisecond timestamp as `M/D/YYYY` in the given time zone.
///
/// Returns an empty string for timestamps outside chrono's range.
pub fn format_date_in<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Format a Unix millisecond timestamp as a date in the local time zone.
pub fn format_local_date(timestamp_ms: i64) -> String {
    format_date_in(timestamp_ms, &Local)
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Current Unix timestamp in milliseconds.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
