use serde::{Deserialize, Serialize};

/// Role of a user; fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Manager,
    Member,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }
}

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Approved,
    Rejected,
}

impl TaskStatus {
    /// Completed or approved
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Completed | Self::Approved)
    }

    /// Pending or in progress
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Human readable label ("in progress" rather than "in-progress")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Next priority in form order (wraps)
    pub fn cycle(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Kind of an in-app notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    TaskAssigned,
    TaskDeadline,
    TaskApproved,
    TaskRejected,
    ClockReminder,
}

impl NotificationKind {
    /// Short glyph shown next to the notification
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::TaskAssigned => "+",
            Self::TaskDeadline => "!",
            Self::TaskApproved => "✓",
            Self::TaskRejected => "✗",
            Self::ClockReminder => "◷",
        }
    }
}

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Tasks,
    TimeTracking,
    Team,
    Reports,
    Notifications,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::TimeTracking => "Time Tracking",
            Self::Team => "Team",
            Self::Reports => "Reports",
            Self::Notifications => "Notifications",
        }
    }

    /// Views shown in the sidebar for a role; Team is manager-only
    pub fn for_role(role: Role) -> &'static [View] {
        match role {
            Role::Manager => &[
                View::Dashboard,
                View::Tasks,
                View::TimeTracking,
                View::Team,
                View::Reports,
                View::Notifications,
            ],
            Role::Member => &[
                View::Dashboard,
                View::Tasks,
                View::TimeTracking,
                View::Reports,
                View::Notifications,
            ],
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    TaskForm,
    Searching,
}
