//! Display formatting for result cards.

use chrono::NaiveDateTime;

/// Format a duration in minutes as `"1 hr 30 min"`.
///
/// A unit whose value is zero is omitted: `45` renders as `"45 min"` with
/// no `"0 hr"` prefix, `60` as `"1 hr"`, and `0` as the empty string.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let remaining = minutes % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours} hr"));
    }
    if remaining > 0 {
        parts.push(format!("{remaining} min"));
    }
    parts.join(" ")
}

/// Format a stop count as `"Nonstop"`, `"1 stop"` or `"n stops"`.
pub fn format_stops(stop_count: u32) -> String {
    match stop_count {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

/// Format a leg timestamp as localized clock time, e.g. `"8:25 AM"`.
///
/// Leg timestamps arrive as naive local datetimes
/// (`2025-06-01T08:25:00`). Unparseable input falls back to the raw
/// string so a bad record degrades on screen instead of faulting.
pub fn format_leg_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
