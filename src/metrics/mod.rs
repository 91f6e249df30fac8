//! Figures derived from the store for each view. Nothing here is stored;
//! every function recomputes from the current state and an explicit `now`.

pub mod dashboard;
pub mod grades;
pub mod hours;
pub mod reports;
pub mod tasks;
pub mod team;

pub use dashboard::{dashboard_stats, recent_activity, ActivityKind};
pub use grades::TeamRating;
pub use hours::{hours_this_week, hours_today, recent_closed_logs, weekly_logs};
pub use reports::{period_report, PeriodReport, ReportPeriod};
pub use tasks::{filter_tasks, owned_tasks, TaskFilter};
pub use team::{member_stats, team_overview};

use crate::domain::TimeLog;

/// Sum of recorded hours; open logs count as zero
pub fn total_hours<'a>(logs: impl IntoIterator<Item = &'a TimeLog>) -> f64 {
    logs.into_iter().filter_map(|log| log.total_hours).sum()
}
