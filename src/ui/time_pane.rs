use crate::app::App;
use crate::format::{elapsed_seconds, format_date, format_elapsed, format_time};
use crate::metrics::{hours_this_week, hours_today, recent_closed_logs, weekly_logs};
use crate::ui::dashboard_pane::render_stat;
use crate::ui::layout::{equal_columns, split_stats};
use crate::ui::styles::{border_style, default_style, hint_style, running_style, title_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const RECENT_LOGS: usize = 5;

/// Clock in/out status, today's and this week's hours, recent sessions
pub fn render_time_pane(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let Some(user) = app.user() else {
        return;
    };
    let logs = &app.state().time_logs;

    let today = hours_today(logs, &user.id, now);
    let week = hours_this_week(logs, &user.id, now);
    let sessions = weekly_logs(logs, &user.id, now).len();
    let average = if sessions == 0 {
        0.0
    } else {
        week / sessions as f64
    };

    let (stats_area, body) = split_stats(area, 4);
    let cols = equal_columns(stats_area, 3);
    render_stat(f, cols[0], "Today", format!("{:.1}h", today), running_style());
    render_stat(f, cols[1], "This Week", format!("{:.1}h", week), title_style());
    render_stat(
        f,
        cols[2],
        "Avg / Session",
        format!("{:.1}h", average),
        default_style(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(body);

    let clock = match app.current_time_log() {
        Some(log) => vec![
            Line::from(Span::styled("● Clocked in", running_style())),
            Line::raw(format!("Since {} on {}", format_time(log.clock_in), format_date(log.clock_in))),
            Line::from(Span::styled(
                format_elapsed(elapsed_seconds(log.clock_in, now)),
                running_style(),
            )),
            Line::from(Span::styled("Press i to clock out", hint_style())),
        ],
        None => vec![
            Line::from(Span::styled("○ Clocked out", hint_style())),
            Line::raw(format!("It is {}", format_time(now))),
            Line::raw(""),
            Line::from(Span::styled("Press i to clock in", hint_style())),
        ],
    };
    let clock = Paragraph::new(clock).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Time Clock ", title_style())),
    );
    f.render_widget(clock, rows[0]);

    let recent = recent_closed_logs(logs, &user.id, RECENT_LOGS);
    let items: Vec<ListItem> = if recent.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No time entries yet",
            hint_style(),
        )))]
    } else {
        recent
            .iter()
            .map(|log| {
                let out = log.clock_out.map(format_time).unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<14}", format_date(log.clock_in))),
                    Span::raw(format!("{} - {}", format_time(log.clock_in), out)),
                    Span::styled(
                        format!("  {:.2}h", log.total_hours.unwrap_or(0.0)),
                        title_style(),
                    ),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Recent Time Entries ", title_style())),
    );
    f.render_widget(list, rows[1]);
}
