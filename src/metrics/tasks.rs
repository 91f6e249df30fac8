use crate::domain::{Role, Task, TaskStatus, User};
use chrono::{DateTime, Local};

/// Tasks a user is responsible for seeing: what a manager assigned, or
/// what a member was assigned.
pub fn owned_tasks<'a>(tasks: &'a [Task], user: &User) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| match user.role {
            Role::Manager => task.assigner_id == user.id,
            Role::Member => task.assignee_id == user.id,
        })
        .collect()
}

/// Status filter offered by the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl TaskFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Apply the status filter and a case-insensitive search over title and
/// description. An empty search matches everything.
pub fn filter_tasks<'a>(tasks: &[&'a Task], filter: TaskFilter, search: &str) -> Vec<&'a Task> {
    let needle = search.trim().to_lowercase();
    tasks
        .iter()
        .copied()
        .filter(|task| filter.matches(task.status))
        .filter(|task| {
            needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Done over total, as a percentage; zero for an empty set
pub fn completion_rate(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

/// Status buckets over a set of tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub done: usize,
    pub open: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub minutes: u64,
}

impl TaskCounts {
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Local>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            counts.total += 1;
            counts.minutes += u64::from(task.time_spent);
            if task.status.is_done() {
                counts.done += 1;
            }
            if task.status.is_open() {
                counts.open += 1;
            }
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                _ => {}
            }
            if task.is_overdue_at(now) {
                counts.overdue += 1;
            }
        }
        counts
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.done, self.total)
    }

    /// Share of `part` in the total, as a whole percentage
    pub fn share(&self, part: usize) -> f64 {
        completion_rate(part, self.total)
    }
}
