use crate::app::App;
use crate::format::format_date_time;
use crate::ui::styles::{
    border_style, default_style, hint_style, notification_style, selected_style, title_style,
    unread_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render_notifications_pane(f: &mut Frame, app: &App, area: Rect) {
    let notifications = &app.state().notifications;

    let items: Vec<ListItem> = if notifications.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "You're all caught up",
            hint_style(),
        )))]
    } else {
        notifications
            .iter()
            .enumerate()
            .map(|(idx, n)| {
                let marker = if n.read {
                    Span::raw("  ")
                } else {
                    Span::styled("● ", unread_style())
                };
                let lines = vec![
                    Line::from(vec![
                        marker,
                        Span::styled(format!("{} ", n.kind.symbol()), notification_style(n.kind)),
                        Span::styled(n.title.clone(), title_style()),
                        Span::styled(format!("  {}", format_date_time(n.created_at)), hint_style()),
                    ]),
                    Line::raw(format!("    {}", n.message)),
                ];
                let style = if idx == app.selected_notification {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(lines).style(style)
            })
            .collect()
    };

    let unread = app.state().unread_count();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(
                format!(" Notifications · {} unread ", unread),
                title_style(),
            )),
    );
    f.render_widget(list, area);
}
