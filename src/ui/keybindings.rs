use crate::app::App;
use crate::domain::{UiMode, View};
use crate::ui::styles::{error_style, hint_style, info_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current screen
pub fn hints(app: &App) -> &'static str {
    if !app.is_authenticated() {
        return " Tab next field   Ctrl+S sign in/up   ←/→ role   Enter submit   Esc quit";
    }
    match app.ui_mode {
        UiMode::TaskForm => " Tab/↑↓ field   ←/→ or Space change   Enter save   Esc cancel",
        UiMode::Searching => " type to search   Enter done   Esc clear",
        UiMode::Normal => match app.view {
            View::Dashboard | View::TimeTracking => {
                " 1-6/Tab view   i clock in/out   L logout   q quit"
            }
            View::Tasks => {
                " ↑/↓ select   n new   e edit   s timer   c complete   a approve   r reject   f filter   / search   q quit"
            }
            View::Team => " 1-6/Tab view   L logout   q quit",
            View::Reports => " 1-6/Tab view   p period   x export   L logout   q quit",
            View::Notifications => {
                " ↑/↓ select   Enter/m read   M all read   d delete   L logout   q quit"
            }
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Render the last status message, if any
pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                error_style()
            } else {
                info_style()
            };
            Line::from(Span::styled(format!(" {}", status.text), style))
        }
        None => Line::raw(""),
    };
    f.render_widget(Paragraph::new(line), area);
}
