//! Display helpers for timestamps, durations and deadlines.
//!
//! Everything here is pure given its inputs; callers pass the wall-clock
//! time explicitly so views and tests see the same answer.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Formats accepted by the task form's deadline field
const DEADLINE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// "Dec 25, 2024"
pub fn format_date(value: DateTime<Local>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// "05:00 PM"
pub fn format_time(value: DateTime<Local>) -> String {
    value.format("%I:%M %p").to_string()
}

/// "Dec 25, 2024, 05:00 PM"
pub fn format_date_time(value: DateTime<Local>) -> String {
    value.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Hours between two instants, rounded to 2 decimal places
pub fn calculate_hours(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    let hours = (end - start).num_milliseconds() as f64 / MS_PER_HOUR as f64;
    (hours * 100.0).round() / 100.0
}

/// Format a minute count as "Xh Ym", "Xh" or "Ym"
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Format elapsed seconds as a zero-padded "HH:MM:SS" clock
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Seconds elapsed since `start`, never negative
pub fn elapsed_seconds(start: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - start).num_seconds().max(0)
}

/// Strictly past the deadline
pub fn is_overdue(deadline: DateTime<Local>, now: DateTime<Local>) -> bool {
    deadline < now
}

/// "Overdue", "2d 3h left", "5h left" or "12m left"
pub fn time_until_deadline(deadline: DateTime<Local>, now: DateTime<Local>) -> String {
    let diff = (deadline - now).num_milliseconds();
    if is_overdue(deadline, now) {
        return "Overdue".to_string();
    }

    let days = diff / MS_PER_DAY;
    let hours = (diff % MS_PER_DAY) / MS_PER_HOUR;

    if days > 0 {
        format!("{}d {}h left", days, hours)
    } else if hours > 0 {
        format!("{}h left", hours)
    } else {
        let minutes = (diff % MS_PER_HOUR) / MS_PER_MINUTE;
        format!("{}m left", minutes)
    }
}

/// Calendar-day bucket used to group time logs
pub fn day_bucket(value: DateTime<Local>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Parse a deadline typed into the task form (local time)
pub fn parse_deadline(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    DEADLINE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Render a deadline the way `parse_deadline` reads it back
pub fn deadline_input(value: DateTime<Local>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}
