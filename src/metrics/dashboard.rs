use super::hours::hours_today;
use super::tasks::{owned_tasks, TaskCounts};
use crate::domain::{TaskStatus, TimeLog, User};
use crate::store::AppState;
use chrono::{DateTime, Local};

/// Headline numbers on the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub completed: usize,
    pub pending: usize,
    pub hours_today: f64,
    pub overdue: usize,
    pub minutes_tracked: u64,
}

pub fn dashboard_stats(state: &AppState, user: &User, now: DateTime<Local>) -> DashboardStats {
    let counts = TaskCounts::tally(owned_tasks(&state.tasks, user), now);
    DashboardStats {
        completed: counts.done,
        pending: counts.open,
        hours_today: hours_today(&state.time_logs, &user.id, now),
        overdue: counts.overdue,
        minutes_tracked: counts.minutes,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    Task(TaskStatus),
    ClockedIn,
    ClockedOut,
}

/// One line of the recent activity feed
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub at: DateTime<Local>,
    pub kind: ActivityKind,
}

impl From<&TimeLog> for Activity {
    fn from(log: &TimeLog) -> Self {
        let (title, at, kind) = match log.clock_out {
            Some(out) => ("Clocked out", out, ActivityKind::ClockedOut),
            None => ("Clocked in", log.clock_in, ActivityKind::ClockedIn),
        };
        Self {
            id: log.id.clone(),
            title: title.to_string(),
            at,
            kind,
        }
    }
}

const RECENT_TASKS: usize = 3;
const RECENT_LOGS: usize = 2;
const FEED_LEN: usize = 5;

/// Latest task updates and clock events, newest first
pub fn recent_activity(state: &AppState, user: &User) -> Vec<Activity> {
    let mut tasks = owned_tasks(&state.tasks, user);
    tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut logs: Vec<&TimeLog> = state
        .time_logs
        .iter()
        .filter(|log| log.user_id == user.id)
        .collect();
    logs.sort_by(|a, b| b.clock_in.cmp(&a.clock_in));

    let mut feed: Vec<Activity> = tasks
        .into_iter()
        .take(RECENT_TASKS)
        .map(|task| Activity {
            id: task.id.clone(),
            title: format!("Updated \"{}\"", task.title),
            at: task.updated_at,
            kind: ActivityKind::Task(task.status),
        })
        .chain(logs.into_iter().take(RECENT_LOGS).map(Activity::from))
        .collect();

    feed.sort_by(|a, b| b.at.cmp(&a.at));
    feed.truncate(FEED_LEN);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::{reduce, Action};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 12, d, h, mi, 0).unwrap()
    }

    fn mike_state() -> AppState {
        let mike = seed::find_demo_user("mike@tokido.com");
        let mut state = reduce(AppState::default(), Action::Login(mike.clone()));
        for task in seed::mock_tasks(&mike) {
            state = reduce(state, Action::AddTask(task));
        }
        state
    }

    #[test]
    fn test_dashboard_stats() {
        let mut state = mike_state();
        state = reduce(
            state,
            Action::ClockIn(TimeLog {
                id: "l1".to_string(),
                user_id: "2".to_string(),
                clock_in: at(21, 9, 0),
                clock_out: Some(at(21, 13, 0)),
                total_hours: Some(4.0),
                date: "2024-12-21".to_string(),
                tasks: Vec::new(),
            }),
        );
        let mike = state.user.clone().unwrap();

        let stats = dashboard_stats(&state, &mike, at(21, 18, 0));
        assert_eq!(
            stats,
            DashboardStats {
                completed: 1,
                pending: 2,
                hours_today: 4.0,
                overdue: 0,
                minutes_tracked: 210,
            }
        );
    }

    #[test]
    fn test_recent_activity_merges_newest_first() {
        let mut state = mike_state();
        state = reduce(
            state,
            Action::ClockIn(TimeLog {
                id: "l1".to_string(),
                user_id: "2".to_string(),
                clock_in: at(22, 9, 0),
                clock_out: None,
                total_hours: None,
                date: "2024-12-22".to_string(),
                tasks: Vec::new(),
            }),
        );
        let mike = state.user.clone().unwrap();

        let feed = recent_activity(&state, &mike);
        let titles: Vec<&str> = feed.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Clocked in",
                "Updated \"Database Migration\"",
                "Updated \"Design Homepage Layout\"",
                "Updated \"User Authentication API\"",
            ]
        );
        assert_eq!(feed[0].kind, ActivityKind::ClockedIn);
    }

    #[test]
    fn test_recent_activity_empty_for_new_user() {
        let emma = seed::find_demo_user("emma@tokido.com");
        let state = reduce(AppState::default(), Action::Login(emma.clone()));
        assert!(recent_activity(&state, &emma).is_empty());
    }
}
