//! Wall-clock alert-time matching.
//!
//! A watch fires when the current `HH:MM` string, computed once per tick in
//! the configured fixed offset, equals any of its alert times. Matching is
//! exact string equality with no tolerance window, so the tick cadence must
//! be at least once per minute or alert times can be skipped.

use chrono::{DateTime, FixedOffset, Utc};

/// Format `now` as `HH:MM` in a fixed offset of `offset_minutes` from UTC.
///
/// An out-of-range offset (beyond ±24h) falls back to UTC.
pub fn wall_clock_hhmm(now: DateTime<Utc>, offset_minutes: i32) -> String {
    match FixedOffset::east_opt(offset_minutes * 60) {
        Some(offset) => now.with_timezone(&offset).format("%H:%M").to_string(),
        None => now.format("%H:%M").to_string(),
    }
}

/// Whether any configured alert time equals `now_hhmm`.
///
/// Pure and total: an empty set never matches, element order is irrelevant.
pub fn matches(alert_times: &[String], now_hhmm: &str) -> bool {
    alert_times.iter().any(|t| t == now_hhmm)
}
