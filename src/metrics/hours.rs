use super::total_hours;
use crate::domain::TimeLog;
use crate::format::day_bucket;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

fn log_day(log: &TimeLog) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&log.date, "%Y-%m-%d").ok()
}

/// Sunday of the calendar week containing `now`
pub fn week_start(now: DateTime<Local>) -> NaiveDate {
    let today = now.date_naive();
    today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
}

/// Hours the user logged in sessions bucketed to today
pub fn hours_today(logs: &[TimeLog], user_id: &str, now: DateTime<Local>) -> f64 {
    let today = day_bucket(now);
    total_hours(
        logs.iter()
            .filter(|log| log.user_id == user_id && log.date == today),
    )
}

/// The user's logs bucketed inside the current Sunday..Saturday week
pub fn weekly_logs<'a>(logs: &'a [TimeLog], user_id: &str, now: DateTime<Local>) -> Vec<&'a TimeLog> {
    let start = week_start(now);
    let end = start + Duration::days(6);
    logs.iter()
        .filter(|log| log.user_id == user_id)
        .filter(|log| log_day(log).is_some_and(|day| day >= start && day <= end))
        .collect()
}

pub fn hours_this_week(logs: &[TimeLog], user_id: &str, now: DateTime<Local>) -> f64 {
    total_hours(weekly_logs(logs, user_id, now))
}

/// The user's most recent closed sessions, newest clock-in first
pub fn recent_closed_logs<'a>(logs: &'a [TimeLog], user_id: &str, limit: usize) -> Vec<&'a TimeLog> {
    let mut closed: Vec<&TimeLog> = logs
        .iter()
        .filter(|log| log.user_id == user_id && !log.is_open())
        .collect();
    closed.sort_by(|a, b| b.clock_in.cmp(&a.clock_in));
    closed.truncate(limit);
    closed
}

/// Logs whose day bucket equals `day`
pub(crate) fn logs_on<'a>(logs: &[&'a TimeLog], day: NaiveDate) -> Vec<&'a TimeLog> {
    logs.iter()
        .copied()
        .filter(|log| log_day(log) == Some(day))
        .collect()
}

/// Logs whose day bucket falls inside `start..=end`
pub(crate) fn logs_between<'a>(
    logs: impl IntoIterator<Item = &'a TimeLog>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a TimeLog> {
    logs.into_iter()
        .filter(|log| log_day(log).is_some_and(|day| day >= start && day <= end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 12, d, h, mi, 0).unwrap()
    }

    fn closed(id: &str, user_id: &str, day: u32, hours: f64) -> TimeLog {
        TimeLog {
            id: id.to_string(),
            user_id: user_id.to_string(),
            clock_in: at(day, 9, 0),
            clock_out: Some(at(day, 17, 0)),
            total_hours: Some(hours),
            date: format!("2024-12-{:02}", day),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // Dec 21, 2024 is a Saturday
        assert_eq!(week_start(at(21, 12, 0)), NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(week_start(at(15, 8, 0)), NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
    }

    #[test]
    fn test_hours_today_and_week() {
        let logs = vec![
            closed("a", "2", 21, 8.5),
            closed("b", "2", 20, 7.0),
            closed("c", "2", 14, 6.0),
            closed("d", "3", 21, 4.0),
        ];
        let now = at(21, 18, 0);

        assert_eq!(hours_today(&logs, "2", now), 8.5);
        assert_eq!(hours_this_week(&logs, "2", now), 15.5);
        assert_eq!(weekly_logs(&logs, "2", now).len(), 2);
    }

    #[test]
    fn test_open_log_counts_zero() {
        let mut open = closed("a", "2", 21, 0.0);
        open.clock_out = None;
        open.total_hours = None;

        assert_eq!(hours_today(&[open], "2", at(21, 12, 0)), 0.0);
    }

    #[test]
    fn test_recent_closed_logs_newest_first() {
        let mut open = closed("open", "2", 21, 0.0);
        open.clock_out = None;
        let logs = vec![
            closed("old", "2", 18, 8.0),
            open,
            closed("new", "2", 20, 8.0),
            closed("other", "3", 20, 8.0),
        ];

        let ids: Vec<&str> = recent_closed_logs(&logs, "2", 5)
            .iter()
            .map(|log| log.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert_eq!(recent_closed_logs(&logs, "2", 1).len(), 1);
    }
}
