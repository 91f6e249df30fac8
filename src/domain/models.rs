use super::enums::{NotificationKind, Priority, Role, TaskStatus};
use crate::format::is_overdue;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// An identity that can sign in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: NaiveDate,
}

impl User {
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    /// First word of the display name ("Sarah" for "Sarah Johnson")
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Reserved: comments are stored with tasks but nothing creates them yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Local>,
}

/// A unit of assigned work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee_id: String,
    pub assigner_id: String,
    pub deadline: DateTime<Local>,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Accumulated tracked time in minutes
    pub time_spent: u32,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_started: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_notes: Option<String>,
}

impl Task {
    /// Open and past its deadline
    pub fn is_overdue_at(&self, now: DateTime<Local>) -> bool {
        self.status.is_open() && is_overdue(self.deadline, now)
    }

    pub fn has_running_timer(&self) -> bool {
        self.timer_started.is_some()
    }
}

/// A clock-in/clock-out session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: String,
    pub user_id: String,
    pub clock_in: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    /// Day bucket, YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl TimeLog {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// An in-app message for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
