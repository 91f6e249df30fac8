pub mod dashboard_pane;
pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod login;
pub mod notifications_pane;
pub mod reports_pane;
pub mod sidebar;
pub mod styles;
pub mod team_pane;
pub mod time_pane;

use crate::app::App;
use crate::domain::{UiMode, View};
use chrono::{DateTime, Local};
use dashboard_pane::render_dashboard;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::{render_keybindings, render_status_bar};
use layout::create_layout;
use list_pane::render_list_pane;
use login::render_login;
use notifications_pane::render_notifications_pane;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use reports_pane::render_reports_pane;
use sidebar::render_sidebar;
use team_pane::render_team_pane;
use time_pane::render_time_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &App, now: DateTime<Local>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_status_bar(f, app, layout.status_area);

    if !app.is_authenticated() {
        render_login(f, app, size);
        return;
    }

    render_sidebar(f, app, layout.sidebar_area, now);

    let content = layout.content_area;
    match app.view {
        View::Dashboard => render_dashboard(f, app, content, now),
        View::Tasks => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(content);
            render_list_pane(f, app, panes[0], now);
            render_details_pane(f, app, panes[1], now);
        }
        View::TimeTracking => render_time_pane(f, app, content, now),
        View::Team => render_team_pane(f, app, content),
        View::Reports => render_reports_pane(f, app, content, now),
        View::Notifications => render_notifications_pane(f, app, content),
    }

    if app.ui_mode == UiMode::TaskForm {
        render_input_form(f, app, size);
    }
}
