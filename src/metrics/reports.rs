use super::grades::Grade;
use super::hours::{logs_between, logs_on};
use super::tasks::{owned_tasks, TaskCounts};
use super::total_hours;
use crate::domain::{TimeLog, User};
use crate::format::format_duration;
use crate::store::AppState;
use chrono::{DateTime, Duration, Local, NaiveDate};

/// Reporting window, counted back from now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
}

impl ReportPeriod {
    pub fn days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Last 7 Days",
            Self::Month => "Last 30 Days",
            Self::Quarter => "Last 90 Days",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Self::Week => Self::Month,
            Self::Month => Self::Quarter,
            Self::Quarter => Self::Week,
        }
    }
}

/// Activity on one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayStats {
    pub day: NaiveDate,
    pub tasks: usize,
    pub hours: f64,
}

impl DayStats {
    /// Short weekday name ("Mon")
    pub fn label(&self) -> String {
        self.day.format("%a").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    pub period: ReportPeriod,
    pub counts: TaskCounts,
    pub total_hours: f64,
    pub log_count: usize,
    /// Tracked minutes per completed task
    pub average_task_minutes: f64,
    pub completion_rate: f64,
    pub grade: Grade,
    /// Oldest first, ending today
    pub daily: Vec<DayStats>,
    pub insights: Vec<Insight>,
}

impl PeriodReport {
    pub fn average_hours_per_log(&self) -> f64 {
        self.total_hours / self.log_count.max(1) as f64
    }
}

const BREAKDOWN_DAYS: i64 = 7;

pub fn period_report(
    state: &AppState,
    user: &User,
    period: ReportPeriod,
    now: DateTime<Local>,
) -> PeriodReport {
    let start = now - Duration::days(period.days());
    let owned = owned_tasks(&state.tasks, user);
    let user_logs: Vec<&TimeLog> = state
        .time_logs
        .iter()
        .filter(|log| log.user_id == user.id)
        .collect();

    let in_window = owned
        .iter()
        .copied()
        .filter(|task| task.created_at >= start && task.created_at <= now);
    let counts = TaskCounts::tally(in_window, now);

    let period_logs = logs_between(user_logs.iter().copied(), start.date_naive(), now.date_naive());
    let hours = total_hours(period_logs.iter().copied());

    let average_task_minutes = if counts.done > 0 {
        counts.minutes as f64 / counts.done as f64
    } else {
        0.0
    };
    let completion_rate = counts.completion_rate();

    let today = now.date_naive();
    let daily = (0..BREAKDOWN_DAYS)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            DayStats {
                day,
                tasks: owned
                    .iter()
                    .filter(|task| task.updated_at.date_naive() == day)
                    .count(),
                hours: total_hours(logs_on(&user_logs, day)),
            }
        })
        .collect();

    PeriodReport {
        period,
        counts,
        total_hours: hours,
        log_count: period_logs.len(),
        average_task_minutes,
        completion_rate,
        grade: Grade::from_rate(completion_rate),
        daily,
        insights: insights(&counts, completion_rate, average_task_minutes),
    }
}

fn insights(counts: &TaskCounts, rate: f64, average_minutes: f64) -> Vec<Insight> {
    let mut lines = vec![Insight {
        title: "Strong Performance",
        message: format!(
            "You've completed {} tasks with a {:.0}% completion rate.",
            counts.done, rate
        ),
    }];
    if counts.overdue > 0 {
        lines.push(Insight {
            title: "Overdue Tasks",
            message: format!(
                "You have {} overdue tasks that need immediate attention.",
                counts.overdue
            ),
        });
    }
    lines.push(Insight {
        title: "Time Management",
        message: format!(
            "Average {} per task. Consider breaking down larger tasks.",
            format_duration(average_minutes.round() as u64)
        ),
    });
    lines.push(Insight {
        title: "Productivity Goal",
        message: "Aim for 85% completion rate to reach excellent performance level.".to_string(),
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::{reduce, Action};
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 12, d, h, 0, 0).unwrap()
    }

    fn state_for(email: &str) -> AppState {
        let user = seed::find_demo_user(email);
        let mut state = reduce(AppState::default(), Action::Login(user.clone()));
        for task in seed::mock_tasks(&user) {
            state = reduce(state, Action::AddTask(task));
        }
        state
    }

    fn log(id: &str, day: u32, hours: f64) -> TimeLog {
        TimeLog {
            id: id.to_string(),
            user_id: "2".to_string(),
            clock_in: at(day, 9),
            clock_out: Some(at(day, 17)),
            total_hours: Some(hours),
            date: format!("2024-12-{:02}", day),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_week_report() {
        let mut state = state_for("mike@tokido.com");
        state = reduce(state, Action::ClockIn(log("a", 20, 8.0)));
        state = reduce(state, Action::ClockIn(log("b", 10, 6.0)));
        let mike = state.user.clone().unwrap();

        let report = period_report(&state, &mike, ReportPeriod::Week, at(21, 18));
        assert_eq!(report.counts.total, 3);
        assert_eq!(report.counts.done, 1);
        assert_eq!(report.total_hours, 8.0);
        assert_eq!(report.log_count, 1);
        assert_eq!(report.average_task_minutes, 210.0);
        assert_eq!(report.grade, Grade::D);

        let month = period_report(&state, &mike, ReportPeriod::Month, at(21, 18));
        assert_eq!(month.total_hours, 14.0);
    }

    #[test]
    fn test_daily_breakdown_oldest_first() {
        let mut state = state_for("mike@tokido.com");
        state = reduce(state, Action::ClockIn(log("a", 21, 8.5)));
        let mike = state.user.clone().unwrap();

        let report = period_report(&state, &mike, ReportPeriod::Week, at(21, 18));
        assert_eq!(report.daily.len(), 7);
        assert_eq!(report.daily[0].day, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());

        let today = report.daily.last().unwrap();
        assert_eq!(today.label(), "Sat");
        assert_eq!(today.hours, 8.5);
        // Database Migration was last updated on the 21st
        assert_eq!(today.tasks, 1);
    }

    #[test]
    fn test_empty_report() {
        let emma = seed::find_demo_user("emma@tokido.com");
        let state = reduce(AppState::default(), Action::Login(emma.clone()));

        let report = period_report(&state, &emma, ReportPeriod::Quarter, at(21, 18));
        assert_eq!(report.completion_rate, 0.0);
        assert_eq!(report.average_task_minutes, 0.0);
        assert_eq!(report.average_hours_per_log(), 0.0);
        assert_eq!(report.insights.len(), 3);
    }

    #[test]
    fn test_overdue_insight() {
        let state = state_for("mike@tokido.com");
        let mike = state.user.clone().unwrap();

        let report = period_report(&state, &mike, ReportPeriod::Month, at(29, 9));
        assert_eq!(report.counts.overdue, 2);
        assert!(report.insights.iter().any(|i| i.title == "Overdue Tasks"));
    }
}
