//! Civil (wall-clock) timestamps and day counting.
//!
//! The engine works on naive local timestamps. The caller's time zone is
//! carried separately as a whole-hour offset and only matters to the solar
//! correction in [`crate::solar`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;

/// Days from CE for 2024-01-01, the anchor of the 60-day cycle.
pub const EPOCH_DAYS_FROM_CE: i32 = 738_886;

/// Accepted layouts, tried in order. A trailing `Z` is stripped first.
const LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Whole days from 2024-01-01 to `date` (negative before the epoch).
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(EPOCH_DAYS_FROM_CE)
}

/// Day of year counted from the last day of the previous year (Jan 1 = 1).
pub fn day_of_year(ts: &NaiveDateTime) -> u32 {
    ts.ordinal()
}

/// Seconds within the minute, including milliseconds.
pub fn seconds_with_millis(ts: &NaiveDateTime) -> f64 {
    let millis = ts.nanosecond() / 1_000_000;
    f64::from(ts.second()) + f64::from(millis) / 1000.0
}

/// Parse `YYYY-MM-DDThh:mm:ss[.fff][Z]`, `YYYY-MM-DDThh:mm`, `YYYY-MM-DD`,
/// or RFC 3339 with a numeric offset.
///
/// A date without a time resolves to local midnight. An explicit offset is
/// dropped and the wall-clock reading kept.
pub fn parse_civil(s: &str) -> Result<NaiveDateTime, TimeError> {
    let raw = s.trim();
    let s = raw.trim_end_matches('Z');
    for layout in LAYOUTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(ts);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ss, got {s} ({e})")))?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Format as `YYYY-MM-DDThh:mm:ss`.
pub fn format_civil(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}
