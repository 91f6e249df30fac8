use crate::app::{App, TaskField, TaskForm};
use crate::format::format_date_time;
use crate::seed;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines(label: &str, value: String, active: bool, choice: bool) -> Vec<Line<'static>> {
    let label = if active {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    let cursor = match (active, choice) {
        (true, true) => Span::styled("  ◂ ▸", hint_style()),
        (true, false) => Span::styled("█", modal_title_style()),
        _ => Span::raw(""),
    };
    vec![
        Line::raw(label),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value, modal_title_style()),
            cursor,
        ]),
        Line::raw(""),
    ]
}

/// Preview of the typed deadline, or "Invalid Date"
fn deadline_preview(form: &TaskForm) -> (String, Style) {
    match form.parsed_deadline() {
        Some(deadline) => (format_date_time(deadline), hint_style()),
        None => ("Invalid Date".to_string(), error_style()),
    }
}

/// Render the create/edit task modal
pub fn render_input_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.task_form else {
        return;
    };
    let modal_area = create_modal_area(area, 22);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines("Title", form.title.clone(), form.field == TaskField::Title, false));
    lines.extend(field_lines(
        "Description",
        form.description.clone(),
        form.field == TaskField::Description,
        false,
    ));
    lines.extend(field_lines(
        "Assign To",
        seed::user_name(&form.assignee_id),
        form.field == TaskField::Assignee,
        true,
    ));

    let mut deadline = field_lines(
        "Deadline (YYYY-MM-DD HH:MM)",
        form.deadline.clone(),
        form.field == TaskField::Deadline,
        false,
    );
    let (preview, preview_style) = deadline_preview(form);
    deadline.insert(2, Line::from(Span::styled(format!("  {}", preview), preview_style)));
    lines.extend(deadline);

    lines.extend(field_lines(
        "Priority",
        form.priority.label().to_string(),
        form.field == TaskField::Priority,
        true,
    ));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

    let title = if form.editing.is_some() {
        " Edit Task "
    } else {
        " Create New Task "
    };
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
