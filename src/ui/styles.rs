use crate::domain::{NotificationKind, Priority, TaskStatus};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Running timer / open session style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Informational status bar message
pub fn info_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Badge colour for a task status
pub fn status_style(status: TaskStatus) -> Style {
    let color = match status {
        TaskStatus::Completed => Color::Green,
        TaskStatus::Approved => Color::Blue,
        TaskStatus::InProgress => Color::Magenta,
        TaskStatus::Rejected => Color::Red,
        TaskStatus::Pending => Color::Gray,
    };
    Style::default().fg(color)
}

pub fn priority_style(priority: Priority) -> Style {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    };
    Style::default().fg(color)
}

pub fn notification_style(kind: NotificationKind) -> Style {
    let color = match kind {
        NotificationKind::TaskAssigned => Color::Blue,
        NotificationKind::TaskDeadline => Color::Yellow,
        NotificationKind::TaskApproved => Color::Green,
        NotificationKind::TaskRejected => Color::Red,
        NotificationKind::ClockReminder => Color::Magenta,
    };
    Style::default().fg(color)
}

/// Unread notification marker
pub fn unread_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}
