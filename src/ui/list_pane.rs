use crate::app::App;
use crate::domain::{Task, UiMode};
use crate::format::{elapsed_seconds, format_duration, format_elapsed, time_until_deadline};
use crate::ui::styles::{
    border_style, default_style, error_style, hint_style, priority_style, running_style,
    selected_style, status_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the filtered task list
pub fn render_list_pane(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let tasks = app.visible_tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        let hint = if app.search.is_empty() {
            "No tasks match the current filter"
        } else {
            "No tasks found. Try adjusting your search terms"
        };
        vec![ListItem::new(Line::from(Span::styled(hint, hint_style())))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let line = create_task_line(task, now);
                let style = if idx == app.selected_task {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let mut title = format!(" Tasks · {} ", app.task_filter.label());
    if !app.search.is_empty() || app.ui_mode == UiMode::Searching {
        title.push_str(&format!("· /{} ", app.search));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Format: [high] Design Homepage Layout  in progress  2h  ⇢ 3d 4h left
fn create_task_line(task: &Task, now: DateTime<Local>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("[{:<6}] ", task.priority.label()), priority_style(task.priority)),
        Span::raw(task.title.clone()),
        Span::raw("  "),
        Span::styled(task.status.label().to_string(), status_style(task.status)),
        Span::raw(format!("  {}", format_duration(u64::from(task.time_spent)))),
    ];

    if let Some(started) = task.timer_started {
        spans.push(Span::styled(
            format!("  ⏱ {}", format_elapsed(elapsed_seconds(started, now))),
            running_style(),
        ));
    }

    let deadline_style = if task.is_overdue_at(now) {
        error_style()
    } else {
        hint_style()
    };
    spans.push(Span::styled(
        format!("  ⇢ {}", time_until_deadline(task.deadline, now)),
        deadline_style,
    ));

    Line::from(spans)
}
