//! Human-readable renderings of video metadata.
//!
//! Every function here is total: missing or out-of-range input maps to a
//! fixed fallback string instead of an error.

use chrono::{Duration, NaiveDateTime};

/// Elapsed time between `timestamp` and `now`, bucketed into the largest
/// fitting unit, e.g. `"3 days ago"`. Timestamps in the future count as no
/// time elapsed.
pub fn relative_age(timestamp: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(timestamp) = timestamp else {
        return "Unknown".to_string();
    };

    let elapsed = (now - timestamp).max(Duration::zero());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 7 {
        ago(days, "day")
    } else if days / 7 < 4 {
        ago(days / 7, "week")
    } else if days / 30 < 12 {
        // 28 and 29 days are past four weeks but short of a 30-day month
        ago((days / 30).max(1), "month")
    } else {
        ago((days / 365).max(1), "year")
    }
}

fn ago(value: i64, unit: &str) -> String {
    let suffix = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{suffix} ago")
}

/// Abbreviated view count: `"999"`, `"1.5K"`, `"15.0M"`. The decimal is
/// rounded half up, so `1_250` reads `"1.3K"`.
pub fn format_view_count(count: Option<i64>) -> String {
    match count {
        None | Some(0) => "0".to_string(),
        Some(count) if count >= 1_000_000 => one_decimal(count, 1_000_000, 'M'),
        Some(count) if count >= 1_000 => one_decimal(count, 1_000, 'K'),
        Some(count) => count.to_string(),
    }
}

fn one_decimal(count: i64, unit: i64, suffix: char) -> String {
    let tenth = unit / 10;
    let tenths = count.saturating_add(tenth / 2) / tenth;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Clock notation: `"M:SS"`, or `"H:MM:SS"` once the duration reaches an hour.
pub fn format_duration(duration_seconds: Option<i32>) -> String {
    let seconds = match duration_seconds {
        Some(seconds) if seconds > 0 => seconds,
        _ => return "0:00".to_string(),
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
