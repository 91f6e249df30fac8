//! Demo identities and the sample data generated on sign-in.

use crate::domain::{Notification, NotificationKind, Priority, Role, Task, TaskStatus, User};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub const MANAGER_ID: &str = "1";
pub const MEMBER_ID: &str = "2";

/// Local timestamp for seed data; the fallback is unreachable for valid constants
fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .earliest()
        .unwrap_or_else(Local::now)
}

fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or_default()
}

fn demo_user(id: &str, name: &str, email: &str, role: Role, join_date: NaiveDate) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
        join_date,
    }
}

/// The fixed demo roster: Sarah (manager), Mike and Emma (members)
pub fn demo_users() -> Vec<User> {
    vec![
        demo_user(MANAGER_ID, "Sarah Johnson", "sarah@tokido.com", Role::Manager, date(2024, 1, 15)),
        demo_user(MEMBER_ID, "Mike Chen", "mike@tokido.com", Role::Member, date(2024, 2, 1)),
        demo_user("3", "Emma Wilson", "emma@tokido.com", Role::Member, date(2024, 2, 15)),
    ]
}

/// Look up a demo identity by email; unknown emails sign in as Mike
pub fn find_demo_user(email: &str) -> User {
    let email = email.trim();
    let mut users = demo_users();
    match users.iter().position(|user| user.email.eq_ignore_ascii_case(email)) {
        Some(idx) => users.swap_remove(idx),
        None => users.swap_remove(1),
    }
}

/// Members a manager can assign work to
pub fn assignable_members() -> Vec<User> {
    demo_users()
        .into_iter()
        .filter(|user| user.role == Role::Member)
        .collect()
}

/// Display name for a user id, empty when unknown
pub fn user_name(id: &str) -> String {
    demo_users()
        .into_iter()
        .find(|user| user.id == id)
        .map(|user| user.name)
        .unwrap_or_default()
}

struct TaskTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    deadline: DateTime<Local>,
    status: TaskStatus,
    priority: Priority,
    time_spent: u32,
    created_at: DateTime<Local>,
    updated_at: DateTime<Local>,
}

fn task_templates() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate {
            id: "1",
            title: "Design Homepage Layout",
            description: "Create a modern, responsive homepage design for the new website",
            deadline: at(2024, 12, 25, 17, 0),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            time_spent: 120,
            created_at: at(2024, 12, 20, 9, 0),
            updated_at: at(2024, 12, 20, 14, 30),
        },
        TaskTemplate {
            id: "2",
            title: "User Authentication API",
            description: "Implement secure user authentication endpoints",
            deadline: at(2024, 12, 28, 12, 0),
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            time_spent: 0,
            created_at: at(2024, 12, 19, 10, 0),
            updated_at: at(2024, 12, 19, 10, 0),
        },
        TaskTemplate {
            id: "3",
            title: "Database Migration",
            description: "Update database schema for new features",
            deadline: at(2024, 12, 30, 15, 0),
            status: TaskStatus::Completed,
            priority: Priority::Low,
            time_spent: 90,
            created_at: at(2024, 12, 18, 8, 0),
            updated_at: at(2024, 12, 21, 16, 0),
        },
    ]
}

/// Sample tasks for a freshly signed-in user. A manager assigns them to
/// Mike; a member receives them from Sarah.
pub fn mock_tasks(user: &User) -> Vec<Task> {
    let (assignee_id, assigner_id) = match user.role {
        Role::Manager => (MEMBER_ID.to_string(), user.id.clone()),
        Role::Member => (user.id.clone(), MANAGER_ID.to_string()),
    };

    task_templates()
        .into_iter()
        .map(|template| Task {
            id: template.id.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            assignee_id: assignee_id.clone(),
            assigner_id: assigner_id.clone(),
            deadline: template.deadline,
            status: template.status,
            priority: template.priority,
            time_spent: template.time_spent,
            created_at: template.created_at,
            updated_at: template.updated_at,
            comments: Vec::new(),
            timer_started: None,
            approval_notes: None,
        })
        .collect()
}

/// Sample notifications for a freshly signed-in user
pub fn mock_notifications(user_id: &str) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            user_id: user_id.to_string(),
            kind: NotificationKind::TaskAssigned,
            title: "New Task Assigned".to_string(),
            message: "You have been assigned to \"Design Homepage Layout\"".to_string(),
            read: false,
            created_at: at(2024, 12, 21, 10, 0),
            action_url: None,
        },
        Notification {
            id: "2".to_string(),
            user_id: user_id.to_string(),
            kind: NotificationKind::TaskDeadline,
            title: "Deadline Reminder".to_string(),
            message: "Task \"User Authentication API\" is due in 2 days".to_string(),
            read: true,
            created_at: at(2024, 12, 21, 9, 0),
            action_url: None,
        },
    ]
}
