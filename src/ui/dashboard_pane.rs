use crate::app::App;
use crate::format::{elapsed_seconds, format_date_time, format_duration, format_elapsed, format_time};
use crate::metrics::{dashboard_stats, recent_activity, ActivityKind};
use crate::ui::layout::{equal_columns, split_stats};
use crate::ui::styles::{border_style, default_style, done_style, error_style, hint_style, running_style, status_style, title_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// A bordered box with a big value and a caption
pub fn render_stat(f: &mut Frame, area: Rect, caption: &str, value: String, style: Style) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(value, style)),
        Line::from(Span::styled(caption.to_string(), hint_style())),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(paragraph, area);
}

pub fn render_dashboard(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let Some(user) = app.user() else {
        return;
    };
    let state = app.state();
    let stats = dashboard_stats(state, user, now);

    let (stats_area, body) = split_stats(area, 4);
    let cols = equal_columns(stats_area, 5);
    render_stat(f, cols[0], "Completed Tasks", stats.completed.to_string(), done_style());
    render_stat(f, cols[1], "Pending Tasks", stats.pending.to_string(), title_style());
    render_stat(f, cols[2], "Hours Today", format!("{:.1}h", stats.hours_today), running_style());
    render_stat(f, cols[3], "Overdue", stats.overdue.to_string(), error_style());
    render_stat(
        f,
        cols[4],
        "Time Tracked",
        format_duration(stats.minutes_tracked),
        default_style(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(body);

    let mut welcome = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", user.first_name()),
            title_style(),
        )),
        Line::raw(format!("It is {} on {}", format_time(now), now.format("%A, %B %-d"))),
    ];
    match state.current_time_log() {
        Some(log) => welcome.push(Line::from(Span::styled(
            format!(
                "Session running since {}  {}",
                format_time(log.clock_in),
                format_elapsed(elapsed_seconds(log.clock_in, now))
            ),
            running_style(),
        ))),
        None => welcome.push(Line::from(Span::styled(
            "Not clocked in. Press i to start your day.",
            hint_style(),
        ))),
    }
    let header = Paragraph::new(welcome).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Dashboard ", title_style())),
    );
    f.render_widget(header, rows[0]);

    let activity = recent_activity(state, user);
    let items: Vec<ListItem> = if activity.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No recent activity",
            hint_style(),
        )))]
    } else {
        activity
            .iter()
            .map(|entry| {
                let style = match &entry.kind {
                    ActivityKind::Task(status) => status_style(*status),
                    ActivityKind::ClockedIn => running_style(),
                    ActivityKind::ClockedOut => done_style(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled("● ", style),
                    Span::raw(entry.title.clone()),
                    Span::styled(format!("  {}", format_date_time(entry.at)), hint_style()),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Recent Activity ", title_style())),
    );
    f.render_widget(list, rows[1]);
}
