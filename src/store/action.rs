use crate::domain::{Notification, Task, TimeLog, User};
use chrono::{DateTime, Local};

/// Every state transition the store accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login(User),
    Logout,
    UpdateUser(User),
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(String),
    ClockIn(TimeLog),
    ClockOut(TimeLog),
    AddNotification(Notification),
    MarkNotificationRead(String),
    DeleteNotification(String),
    SetTimer {
        task_id: String,
        started: DateTime<Local>,
    },
    StopTimer {
        task_id: String,
        minutes: u32,
        stopped_at: DateTime<Local>,
    },
}

/// Independently persisted part of the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    User,
    Tasks,
    TimeLogs,
    Notifications,
}

impl Action {
    /// The slice this action changes, and therefore the one to persist
    pub fn slice(&self) -> Slice {
        match self {
            Self::Login(_) | Self::Logout | Self::UpdateUser(_) => Slice::User,
            Self::AddTask(_)
            | Self::UpdateTask(_)
            | Self::DeleteTask(_)
            | Self::SetTimer { .. }
            | Self::StopTimer { .. } => Slice::Tasks,
            Self::ClockIn(_) | Self::ClockOut(_) => Slice::TimeLogs,
            Self::AddNotification(_)
            | Self::MarkNotificationRead(_)
            | Self::DeleteNotification(_) => Slice::Notifications,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::UpdateUser(_) => "UPDATE_USER",
            Self::AddTask(_) => "ADD_TASK",
            Self::UpdateTask(_) => "UPDATE_TASK",
            Self::DeleteTask(_) => "DELETE_TASK",
            Self::ClockIn(_) => "CLOCK_IN",
            Self::ClockOut(_) => "CLOCK_OUT",
            Self::AddNotification(_) => "ADD_NOTIFICATION",
            Self::MarkNotificationRead(_) => "MARK_NOTIFICATION_READ",
            Self::DeleteNotification(_) => "DELETE_NOTIFICATION",
            Self::SetTimer { .. } => "SET_TIMER",
            Self::StopTimer { .. } => "STOP_TIMER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_only_touches_user_slice() {
        assert_eq!(Action::Logout.slice(), Slice::User);
    }

    #[test]
    fn test_timer_actions_touch_tasks() {
        let started = Local::now();
        let action = Action::SetTimer {
            task_id: "1".to_string(),
            started,
        };
        assert_eq!(action.slice(), Slice::Tasks);
        assert_eq!(action.name(), "SET_TIMER");
        assert_eq!(Action::DeleteNotification("1".into()).slice(), Slice::Notifications);
    }
}
