use crate::app::App;
use crate::format::{elapsed_seconds, format_date_time, format_duration, format_elapsed, time_until_deadline};
use crate::seed;
use crate::ui::styles::{
    border_style, default_style, error_style, priority_style, running_style, status_style,
    title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let (Some(task), Some(user)) = (app.selected_task(), app.user()) else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(task.title.clone(), title_style())),
        Line::raw(""),
    ];
    if !task.description.is_empty() {
        lines.push(Line::raw(task.description.clone()));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style()),
        Span::styled(task.status.label(), status_style(task.status)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style()),
        Span::styled(task.priority.label(), priority_style(task.priority)),
    ]));

    let relation = if task.assignee_id == user.id {
        format!("Assigned to you by {}", seed::user_name(&task.assigner_id))
    } else {
        format!("Assigned by you to {}", seed::user_name(&task.assignee_id))
    };
    lines.push(Line::raw(relation));

    let deadline_style = if task.is_overdue_at(now) {
        error_style()
    } else {
        default_style()
    };
    lines.push(Line::from(vec![
        Span::styled("Deadline: ", title_style()),
        Span::raw(format_date_time(task.deadline)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("          {}", time_until_deadline(task.deadline, now)),
        deadline_style,
    )));

    lines.push(Line::from(vec![
        Span::styled("Tracked:  ", title_style()),
        Span::raw(format_duration(u64::from(task.time_spent))),
    ]));
    if let Some(started) = task.timer_started {
        lines.push(Line::from(vec![
            Span::styled("Timer:    ", title_style()),
            Span::styled(format_elapsed(elapsed_seconds(started, now)), running_style()),
        ]));
    }

    if let Some(notes) = &task.approval_notes {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Review:   ", title_style()),
            Span::raw(notes.clone()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Updated {}", format_date_time(task.updated_at))));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
