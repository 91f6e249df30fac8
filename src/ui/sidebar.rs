use crate::app::App;
use crate::domain::View;
use crate::format::{elapsed_seconds, format_elapsed};
use crate::ui::styles::{border_style, default_style, hint_style, running_style, selected_style, title_style, unread_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Navigation, signed-in user and clock state
pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let mut lines = Vec::new();

    if let Some(user) = app.user() {
        lines.push(Line::from(Span::styled(user.name.clone(), title_style())));
        lines.push(Line::from(Span::styled(user.role.label(), hint_style())));
        lines.push(Line::raw(""));
    }

    let unread = app.state().unread_count();
    for (idx, view) in app.views().iter().enumerate() {
        let style = if *view == app.view {
            selected_style()
        } else {
            default_style()
        };
        let mut spans = vec![Span::styled(format!(" {} {:<14}", idx + 1, view.label()), style)];
        if *view == View::Notifications && unread > 0 {
            spans.push(Span::styled(format!(" ({})", unread), unread_style()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    match app.current_time_log() {
        Some(log) => {
            lines.push(Line::from(Span::styled("● Clocked in", running_style())));
            lines.push(Line::from(Span::styled(
                format!("  {}", format_elapsed(elapsed_seconds(log.clock_in, now))),
                running_style(),
            )));
        }
        None => lines.push(Line::from(Span::styled("○ Clocked out", hint_style()))),
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Tokido ", title_style())),
    );
    f.render_widget(paragraph, area);
}
