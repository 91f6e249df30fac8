use crate::app::{App, LoginField};
use crate::seed;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines(label: &str, value: &str, active: bool) -> Vec<Line<'static>> {
    let label = if active {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    vec![
        Line::raw(label),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value.to_string(), modal_title_style()),
            if active {
                Span::styled("█", modal_title_style())
            } else {
                Span::raw("")
            },
        ]),
        Line::raw(""),
    ]
}

/// Render the sign-in / sign-up box
pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.login;
    let modal_area = create_modal_area(area, if form.sign_up { 20 } else { 16 });
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    if form.sign_up {
        lines.extend(field_lines("Name", &form.name, form.field == LoginField::Name));
    }
    lines.extend(field_lines("Email", &form.email, form.field == LoginField::Email));
    if form.sign_up {
        lines.extend(field_lines(
            "Role",
            form.role.label(),
            form.field == LoginField::Role,
        ));
    } else {
        lines.push(Line::from(Span::styled("Demo accounts:", hint_style())));
        for user in seed::demo_users() {
            lines.push(Line::from(Span::styled(
                format!("  {}  ({})", user.email, user.role.label()),
                hint_style(),
            )));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw("Enter to continue  ·  Ctrl+S to switch  ·  Esc to quit"));

    let title = if form.sign_up {
        " Create Account "
    } else {
        " Sign In "
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
