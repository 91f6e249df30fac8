use crate::app::App;
use crate::format::format_duration;
use crate::metrics::{period_report, PeriodReport};
use crate::ui::dashboard_pane::render_stat;
use crate::ui::layout::{equal_columns, split_stats};
use crate::ui::styles::{
    border_style, default_style, done_style, error_style, gauge_style, hint_style, running_style,
    title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const BAR_WIDTH: usize = 20;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn breakdown_lines(report: &PeriodReport) -> Vec<Line<'static>> {
    let max_hours = report
        .daily
        .iter()
        .map(|day| day.hours)
        .fold(0.0_f64, f64::max);
    report
        .daily
        .iter()
        .map(|day| {
            Line::from(vec![
                Span::raw(format!("{:<4}", day.label())),
                Span::styled(format!("{:<w$}", bar(day.hours, max_hours), w = BAR_WIDTH), running_style()),
                Span::raw(format!(" {:>5.1}h  {} tasks", day.hours, day.tasks)),
            ])
        })
        .collect()
}

fn status_lines(report: &PeriodReport) -> Vec<Line<'static>> {
    let counts = &report.counts;
    vec![
        Line::from(vec![
            Span::styled(format!("{:<12}", "Completed"), done_style()),
            Span::raw(format!("{:>4}  {:>5.1}%", counts.done, counts.share(counts.done))),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "In Progress"), running_style()),
            Span::raw(format!(
                "{:>4}  {:>5.1}%",
                counts.in_progress,
                counts.share(counts.in_progress)
            )),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Pending"), default_style()),
            Span::raw(format!("{:>4}  {:>5.1}%", counts.pending, counts.share(counts.pending))),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Overdue"), error_style()),
            Span::raw(format!("{:>4}  {:>5.1}%", counts.overdue, counts.share(counts.overdue))),
        ]),
        Line::raw(""),
        Line::raw(format!(
            "Avg task time {}",
            format_duration(report.average_task_minutes.round() as u64)
        )),
        Line::raw(format!(
            "Avg session   {:.1}h over {} sessions",
            report.average_hours_per_log(),
            report.log_count
        )),
    ]
}

/// Performance report for the selected period
pub fn render_reports_pane(f: &mut Frame, app: &App, area: Rect, now: DateTime<Local>) {
    let Some(user) = app.user() else {
        return;
    };
    let report = period_report(app.state(), user, app.report_period, now);

    let (stats_area, body) = split_stats(area, 4);
    let cols = equal_columns(stats_area, 4);
    render_stat(f, cols[0], "Tasks", report.counts.total.to_string(), title_style());
    render_stat(f, cols[1], "Completed", report.counts.done.to_string(), done_style());
    render_stat(f, cols[2], "Hours Logged", format!("{:.1}h", report.total_hours), running_style());
    render_stat(f, cols[3], "Grade", report.grade.label().to_string(), title_style());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(body);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(
                    format!(" {} · Completion Rate ", report.period.label()),
                    title_style(),
                )),
        )
        .gauge_style(gauge_style())
        .percent(report.completion_rate.round().clamp(0.0, 100.0) as u16)
        .label(format!("{:.1}%", report.completion_rate));
    f.render_widget(gauge, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);
    let status = Paragraph::new(status_lines(&report)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Task Status ", title_style())),
    );
    f.render_widget(status, middle[0]);
    let daily = Paragraph::new(breakdown_lines(&report)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Last 7 Days ", title_style())),
    );
    f.render_widget(daily, middle[1]);

    let mut insights = Vec::new();
    for insight in &report.insights {
        insights.push(Line::from(Span::styled(insight.title, title_style())));
        insights.push(Line::from(Span::styled(insight.message.clone(), hint_style())));
    }
    let insights = Paragraph::new(insights)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Insights ", title_style())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(insights, rows[2]);
}
