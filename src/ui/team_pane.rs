use crate::app::App;
use crate::metrics::{member_stats, team_overview, TeamRating};
use crate::ui::dashboard_pane::render_stat;
use crate::ui::layout::{equal_columns, split_stats};
use crate::ui::styles::{
    border_style, default_style, done_style, error_style, gauge_style, hint_style, running_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

fn rating_style(rating: TeamRating) -> Style {
    match rating {
        TeamRating::Excellent => done_style(),
        TeamRating::Good => gauge_style(),
        TeamRating::Average => running_style(),
        TeamRating::NeedsImprovement => error_style(),
    }
}

/// Manager overview of every other roster member
pub fn render_team_pane(f: &mut Frame, app: &App, area: Rect) {
    let Some(user) = app.user() else {
        return;
    };
    let state = app.state();
    let overview = team_overview(state, user);

    let (stats_area, body) = split_stats(area, 4);
    let cols = equal_columns(stats_area, 4);
    render_stat(f, cols[0], "Team Members", overview.members.to_string(), title_style());
    render_stat(f, cols[1], "In Progress", overview.in_progress.to_string(), running_style());
    render_stat(f, cols[2], "Completed", overview.done.to_string(), done_style());
    render_stat(f, cols[3], "Total Hours", format!("{:.1}h", overview.hours), default_style());

    let header = Row::new(vec!["Member", "Email", "Tasks", "Done", "Open", "Hours", "Rate", "Performance"])
        .style(title_style());
    let rows: Vec<Row> = member_stats(state, user)
        .into_iter()
        .map(|stats| {
            Row::new(vec![
                Cell::from(stats.member.name),
                Cell::from(Span::styled(stats.member.email, hint_style())),
                Cell::from(stats.total.to_string()),
                Cell::from(stats.done.to_string()),
                Cell::from(stats.open.to_string()),
                Cell::from(format!("{:.1}h", stats.hours)),
                Cell::from(format!("{:.0}%", stats.completion_rate)),
                Cell::from(Span::styled(stats.rating.label(), rating_style(stats.rating))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Team Members ", title_style())),
    );
    f.render_widget(table, body);
}
