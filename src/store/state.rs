use super::action::Action;
use crate::domain::{Notification, Task, TaskStatus, TimeLog, User};
use crate::persistence::Snapshot;

/// The whole application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub tasks: Vec<Task>,
    pub time_logs: Vec<TimeLog>,
    pub notifications: Vec<Notification>,
    pub is_authenticated: bool,
}

impl AppState {
    /// Initial state built directly from what storage held. Closed time logs
    /// are loaded too so history survives a restart.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            is_authenticated: snapshot.user.is_some(),
            user: snapshot.user,
            tasks: snapshot.tasks,
            time_logs: snapshot.time_logs,
            notifications: snapshot.notifications,
        }
    }

    /// The signed-in user's open time log with the latest clock-in
    pub fn current_time_log(&self) -> Option<&TimeLog> {
        let user = self.user.as_ref()?;
        self.time_logs
            .iter()
            .filter(|log| log.is_open() && log.user_id == user.id)
            .max_by_key(|log| log.clock_in)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// Apply one action. Total: unknown ids leave the state unchanged.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Login(user) => {
            state.user = Some(user);
            state.is_authenticated = true;
            state
        }
        Action::Logout => AppState::default(),
        Action::UpdateUser(user) => {
            state.user = Some(user);
            state
        }
        Action::AddTask(task) => {
            state.tasks.push(task);
            state
        }
        Action::UpdateTask(task) => {
            if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task;
            }
            state
        }
        Action::DeleteTask(id) => {
            state.tasks.retain(|task| task.id != id);
            state
        }
        Action::ClockIn(log) => {
            state.time_logs.push(log);
            state
        }
        Action::ClockOut(log) => {
            if let Some(existing) = state.time_logs.iter_mut().find(|l| l.id == log.id) {
                *existing = log;
            }
            state
        }
        Action::AddNotification(notification) => {
            state.notifications.insert(0, notification);
            state
        }
        Action::MarkNotificationRead(id) => {
            if let Some(n) = state.notifications.iter_mut().find(|n| n.id == id) {
                n.read = true;
            }
            state
        }
        Action::DeleteNotification(id) => {
            if let Some(idx) = state.notifications.iter().position(|n| n.id == id) {
                state.notifications.remove(idx);
            }
            state
        }
        Action::SetTimer { task_id, started } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == task_id) {
                task.timer_started = Some(started);
                task.status = TaskStatus::InProgress;
            }
            state
        }
        Action::StopTimer {
            task_id,
            minutes,
            stopped_at,
        } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == task_id) {
                task.timer_started = None;
                task.time_spent = task.time_spent.saturating_add(minutes);
                task.updated_at = stopped_at;
            }
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationKind, Priority};
    use crate::seed;
    use chrono::{DateTime, Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 12, 21, h, mi, 0).unwrap()
    }

    fn signed_in(email: &str) -> AppState {
        let user = seed::find_demo_user(email);
        let mut state = reduce(AppState::default(), Action::Login(user.clone()));
        for task in seed::mock_tasks(&user) {
            state = reduce(state, Action::AddTask(task));
        }
        for n in seed::mock_notifications(&user.id) {
            state = reduce(state, Action::AddNotification(n));
        }
        state
    }

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            user_id: "2".to_string(),
            kind: NotificationKind::ClockReminder,
            title: "Clocked In".to_string(),
            message: "You clocked in".to_string(),
            read: false,
            created_at: at(9, 0),
            action_url: None,
        }
    }

    fn open_log(id: &str, user_id: &str, clock_in: DateTime<Local>) -> TimeLog {
        TimeLog {
            id: id.to_string(),
            user_id: user_id.to_string(),
            clock_in,
            clock_out: None,
            total_hours: None,
            date: "2024-12-21".to_string(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_login_sets_user_and_auth() {
        let user = seed::find_demo_user("mike@tokido.com");
        let state = reduce(AppState::default(), Action::Login(user.clone()));
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user));
    }

    #[test]
    fn test_logout_resets_everything() {
        let state = signed_in("sarah@tokido.com");
        assert_eq!(reduce(state, Action::Logout), AppState::default());
    }

    #[test]
    fn test_update_user_replaces_record() {
        let state = signed_in("mike@tokido.com");
        let mut renamed = state.user.clone().unwrap();
        renamed.name = "Michael Chen".to_string();

        let state = reduce(state, Action::UpdateUser(renamed));
        assert_eq!(state.user.unwrap().name, "Michael Chen");
    }

    #[test]
    fn test_update_task_in_place_and_unknown_is_noop() {
        let state = signed_in("mike@tokido.com");
        let mut edited = state.tasks[1].clone();
        edited.title = "Auth API v2".to_string();

        let state = reduce(state, Action::UpdateTask(edited.clone()));
        assert_eq!(state.tasks[1], edited);
        assert_eq!(state.tasks.len(), 3);

        let mut ghost = edited;
        ghost.id = "missing".to_string();
        let before = state.clone();
        assert_eq!(reduce(state, Action::UpdateTask(ghost)), before);
    }

    #[test]
    fn test_delete_task() {
        let state = signed_in("mike@tokido.com");
        let state = reduce(state, Action::DeleteTask("2".to_string()));
        let ids: Vec<&str> = state.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_set_timer_forces_in_progress() {
        let state = signed_in("mike@tokido.com");
        assert_eq!(state.tasks[1].status, TaskStatus::Pending);

        let state = reduce(
            state,
            Action::SetTimer {
                task_id: "2".to_string(),
                started: at(10, 0),
            },
        );
        let task = state.task("2").unwrap();
        assert_eq!(task.timer_started, Some(at(10, 0)));
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_stop_timer_adds_minutes_and_clears_timer() {
        let mut state = signed_in("mike@tokido.com");
        state.tasks[0].timer_started = Some(at(9, 0));
        let before = state.tasks[0].time_spent;

        let state = reduce(
            state,
            Action::StopTimer {
                task_id: "1".to_string(),
                minutes: 45,
                stopped_at: at(9, 45),
            },
        );
        let task = state.task("1").unwrap();
        assert_eq!(task.time_spent, before + 45);
        assert_eq!(task.timer_started, None);
        assert_eq!(task.updated_at, at(9, 45));
    }

    #[test]
    fn test_stop_timer_without_running_timer_still_adds() {
        let state = signed_in("mike@tokido.com");
        let state = reduce(
            state,
            Action::StopTimer {
                task_id: "2".to_string(),
                minutes: 5,
                stopped_at: at(11, 0),
            },
        );
        let task = state.task("2").unwrap();
        assert_eq!(task.time_spent, 5);
        assert!(task.timer_started.is_none());
    }

    #[test]
    fn test_notifications_newest_first() {
        let state = reduce(AppState::default(), Action::AddNotification(notification("a")));
        let state = reduce(state, Action::AddNotification(notification("b")));
        let ids: Vec<&str> = state.notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let state = reduce(AppState::default(), Action::AddNotification(notification("a")));
        let once = reduce(state, Action::MarkNotificationRead("a".to_string()));
        let twice = reduce(once.clone(), Action::MarkNotificationRead("a".to_string()));

        assert!(once.notifications[0].read);
        assert_eq!(once, twice);
        assert_eq!(twice.unread_count(), 0);
    }

    #[test]
    fn test_delete_notification_removes_exactly_one() {
        let mut state = AppState::default();
        for id in ["a", "b", "c"] {
            state = reduce(state, Action::AddNotification(notification(id)));
        }

        let state = reduce(state, Action::DeleteNotification("b".to_string()));
        let ids: Vec<&str> = state.notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);

        let before = state.clone();
        assert_eq!(reduce(state, Action::DeleteNotification("zzz".to_string())), before);
    }

    #[test]
    fn test_clock_in_and_out_derives_current_log() {
        let state = signed_in("mike@tokido.com");
        let log = open_log("log-1", "2", at(9, 0));

        let state = reduce(state, Action::ClockIn(log.clone()));
        assert_eq!(state.current_time_log(), Some(&log));

        let closed = TimeLog {
            clock_out: Some(at(17, 30)),
            total_hours: Some(8.5),
            ..log
        };
        let state = reduce(state, Action::ClockOut(closed.clone()));
        assert_eq!(state.current_time_log(), None);
        assert_eq!(state.time_logs, vec![closed]);
    }

    #[test]
    fn test_current_log_ignores_other_users_and_picks_latest() {
        let state = signed_in("mike@tokido.com");
        let state = reduce(state, Action::ClockIn(open_log("emma", "3", at(10, 0))));
        let state = reduce(state, Action::ClockIn(open_log("early", "2", at(8, 0))));
        let state = reduce(state, Action::ClockIn(open_log("late", "2", at(9, 0))));

        assert_eq!(state.current_time_log().map(|l| l.id.as_str()), Some("late"));
    }

    #[test]
    fn test_from_snapshot_restores_session() {
        let user = seed::find_demo_user("sarah@tokido.com");
        let snapshot = Snapshot {
            user: Some(user.clone()),
            tasks: seed::mock_tasks(&user),
            ..Snapshot::default()
        };

        let state = AppState::from_snapshot(snapshot);
        assert!(state.is_authenticated);
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(state.tasks[0].priority, Priority::High);
    }
}
