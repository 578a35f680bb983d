#![forbid(unsafe_code)]

/// Whole seconds from `since_ms` to `now_ms`, floored. A clock that moved
/// backwards yields zero rather than a negative credit.
pub fn whole_seconds_between(since_ms: i64, now_ms: i64) -> i64 {
    now_ms.saturating_sub(since_ms).max(0) / 1000
}

/// Renders a second count as `H:MM:SS` (hours are not capped at 24).
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
