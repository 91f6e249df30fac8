use crate::app::App;
use crate::domain::{UiMode, View};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    app.clear_status();
    app.request_redraw();

    if !app.is_authenticated() {
        return handle_login_mode(app, key, now);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::TaskForm => handle_task_form_mode(app, key, now),
        UiMode::Searching => handle_search_mode(app, key),
    }
}

/// Keys on the sign-in screen
fn handle_login_mode(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Enter => app.submit_login(now),
        KeyCode::Tab => app.login_next_field(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login_toggle_mode()
        }
        KeyCode::Left | KeyCode::Right => app.login_cycle_role(),
        KeyCode::Backspace => app.login_backspace(),
        KeyCode::Char(c) => app.login_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => app.next_view(),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c.to_digit(10).unwrap_or(1) as usize - 1;
            app.select_view_index(index);
        }
        KeyCode::Char('L') => app.logout(),
        _ => match app.view {
            View::Dashboard | View::TimeTracking => handle_time_keys(app, key, now),
            View::Tasks => handle_task_keys(app, key, now),
            View::Reports => handle_report_keys(app, key),
            View::Notifications => handle_notification_keys(app, key),
            View::Team => {}
        },
    }
    Ok(false)
}

fn handle_time_keys(app: &mut App, key: KeyEvent, now: DateTime<Local>) {
    if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
        app.toggle_clock(now);
    }
}

fn handle_task_keys(app: &mut App, key: KeyEvent, now: DateTime<Local>) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_task(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_task(),
        KeyCode::Char('n') => app.open_new_task_form(now),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_task_form(),
        KeyCode::Char('s') => app.toggle_timer(now),
        KeyCode::Char('c') => app.complete_selected(now),
        KeyCode::Char('a') => app.approve_selected(now),
        KeyCode::Char('r') => app.reject_selected(now),
        KeyCode::Char('f') => app.cycle_task_filter(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
}

fn handle_report_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('p') => app.cycle_report_period(),
        KeyCode::Char('x') => app.export_report(),
        _ => {}
    }
}

fn handle_notification_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_notification(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_notification(),
        KeyCode::Enter | KeyCode::Char('m') => app.mark_selected_read(),
        KeyCode::Char('M') => app.mark_all_read(),
        KeyCode::Char('d') => app.delete_selected_notification(),
        _ => {}
    }
}

/// Handle keys while the task form is open
fn handle_task_form_mode(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Enter => app.submit_task_form(now),
        KeyCode::Tab | KeyCode::Down => app.task_form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.task_form_prev_field(),
        KeyCode::Left | KeyCode::Right => app.task_form_cycle(),
        KeyCode::Backspace => app.task_form_backspace(),
        KeyCode::Char(c) => app.task_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

fn handle_search_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.finish_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_add_char(c),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::TaskStatus;
    use crate::persistence::MemoryStorage;
    use crate::store::Store;
    use chrono::TimeZone;

    fn create_test_app() -> App {
        App::new(Store::new(Box::new(MemoryStorage::default())), Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 12, 21, 9, 0, 0).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)), now()).unwrap();
        }
    }

    fn logged_in(email: &str) -> App {
        let mut app = create_test_app();
        type_text(&mut app, email);
        handle_key(&mut app, key(KeyCode::Enter), now()).unwrap();
        app
    }

    #[test]
    fn test_login_from_keyboard() {
        let app = logged_in("sarah@tokido.com");
        assert!(app.is_authenticated());
        assert_eq!(app.user().unwrap().name, "Sarah Johnson");
    }

    #[test]
    fn test_q_is_text_on_login_screen() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q')), now()).unwrap();
        assert!(!should_quit);
        assert_eq!(app.login.email, "q");
    }

    #[test]
    fn test_handle_quit() {
        let mut app = logged_in("mike@tokido.com");
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q')), now()).unwrap();
        assert!(should_quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c, now()).unwrap());
    }

    #[test]
    fn test_view_switching() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('2')), now()).unwrap();
        assert_eq!(app.view, View::Tasks);

        handle_key(&mut app, key(KeyCode::Tab), now()).unwrap();
        assert_eq!(app.view, View::TimeTracking);

        // members have five views, so '6' is ignored
        handle_key(&mut app, key(KeyCode::Char('6')), now()).unwrap();
        assert_eq!(app.view, View::TimeTracking);
    }

    #[test]
    fn test_clock_toggle_from_time_view() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('3')), now()).unwrap();
        handle_key(&mut app, key(KeyCode::Char('i')), now()).unwrap();
        assert!(app.current_time_log().is_some());
    }

    #[test]
    fn test_task_navigation_and_timer() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('2')), now()).unwrap();
        handle_key(&mut app, key(KeyCode::Down), now()).unwrap();
        assert_eq!(app.selected_task, 1);

        handle_key(&mut app, key(KeyCode::Char('s')), now()).unwrap();
        let task = app.state().task("2").unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.has_running_timer());
    }

    #[test]
    fn test_task_form_round_trip() {
        let mut app = logged_in("sarah@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('2')), now()).unwrap();
        handle_key(&mut app, key(KeyCode::Char('n')), now()).unwrap();
        assert_eq!(app.ui_mode, UiMode::TaskForm);

        // 'q' is text inside the form, not quit
        type_text(&mut app, "quarterly review");
        handle_key(&mut app, key(KeyCode::Enter), now()).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.state().tasks.iter().any(|t| t.title == "quarterly review"));
    }

    #[test]
    fn test_search_mode() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('2')), now()).unwrap();
        handle_key(&mut app, key(KeyCode::Char('/')), now()).unwrap();
        type_text(&mut app, "database");
        handle_key(&mut app, key(KeyCode::Enter), now()).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.visible_tasks().len(), 1);

        handle_key(&mut app, key(KeyCode::Esc), now()).unwrap();
        assert_eq!(app.visible_tasks().len(), 3);
    }

    #[test]
    fn test_notification_keys() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('5')), now()).unwrap();
        assert_eq!(app.view, View::Notifications);

        handle_key(&mut app, key(KeyCode::Char('M')), now()).unwrap();
        assert_eq!(app.state().unread_count(), 0);

        handle_key(&mut app, key(KeyCode::Char('d')), now()).unwrap();
        assert_eq!(app.state().notifications.len(), 1);
    }

    #[test]
    fn test_logout_key() {
        let mut app = logged_in("mike@tokido.com");
        handle_key(&mut app, key(KeyCode::Char('L')), now()).unwrap();
        assert!(!app.is_authenticated());
    }
}
