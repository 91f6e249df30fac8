use crate::config::Config;
use crate::domain::{
    Notification, NotificationKind, Priority, Role, Task, TaskStatus, TimeLog, UiMode, User, View,
};
use crate::format::{calculate_hours, day_bucket, deadline_input, elapsed_seconds, format_time, parse_deadline};
use crate::metrics::{filter_tasks, owned_tasks, ReportPeriod, TaskFilter};
use crate::seed;
use crate::store::{Action, AppState, Store, SubscriptionId};
use crate::ticker::Ticker;
use chrono::{DateTime, Duration, Local};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Which login form field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Name,
    Role,
}

/// Sign-in / sign-up form shown while nobody is authenticated
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub sign_up: bool,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub field: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            sign_up: false,
            email: String::new(),
            name: String::new(),
            role: Role::Member,
            field: LoginField::Email,
        }
    }
}

impl LoginForm {
    fn fields(&self) -> &'static [LoginField] {
        if self.sign_up {
            &[LoginField::Name, LoginField::Email, LoginField::Role]
        } else {
            &[LoginField::Email]
        }
    }
}

/// Task form field order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Assignee,
    Deadline,
    Priority,
}

const TASK_FIELDS: [TaskField; 5] = [
    TaskField::Title,
    TaskField::Description,
    TaskField::Assignee,
    TaskField::Deadline,
    TaskField::Priority,
];

/// Create/edit task form state
#[derive(Debug, Clone)]
pub struct TaskForm {
    /// Id of the task being edited, None when creating
    pub editing: Option<String>,
    pub title: String,
    pub description: String,
    pub assignee_id: String,
    pub deadline: String,
    pub priority: Priority,
    pub field: TaskField,
}

impl TaskForm {
    fn blank(now: DateTime<Local>) -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            assignee_id: seed::MEMBER_ID.to_string(),
            deadline: deadline_input(now + Duration::days(7)),
            priority: Priority::Medium,
            field: TaskField::Title,
        }
    }

    fn from_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            assignee_id: task.assignee_id.clone(),
            deadline: deadline_input(task.deadline),
            priority: task.priority,
            field: TaskField::Title,
        }
    }

    /// Parsed deadline, or None while the text is not a valid date
    pub fn parsed_deadline(&self) -> Option<DateTime<Local>> {
        parse_deadline(&self.deadline)
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            TaskField::Title => Some(&mut self.title),
            TaskField::Description => Some(&mut self.description),
            TaskField::Deadline => Some(&mut self.deadline),
            TaskField::Assignee | TaskField::Priority => None,
        }
    }
}

/// Message shown in the status bar until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub config: Config,
    pub view: View,
    pub ui_mode: UiMode,
    pub login: LoginForm,
    pub task_form: Option<TaskForm>,
    pub task_filter: TaskFilter,
    pub search: String,
    pub selected_task: usize,
    pub selected_notification: usize,
    pub report_period: ReportPeriod,
    pub status: Option<StatusMessage>,
    pub ticker: Ticker,
    needs_redraw: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    pub fn new(mut store: Store, config: Config) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        let subscription = store.subscribe(move |_| flag.set(true));

        Self {
            store,
            ticker: Ticker::new(config.tick_interval()),
            config,
            view: View::Dashboard,
            ui_mode: UiMode::Normal,
            login: LoginForm::default(),
            task_form: None,
            task_filter: TaskFilter::All,
            search: String::new(),
            selected_task: 0,
            selected_notification: 0,
            report_period: ReportPeriod::default(),
            status: None,
            needs_redraw,
            subscription,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn user(&self) -> Option<&User> {
        self.store.state().user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.state().is_authenticated
    }

    /// Consume the redraw flag set by the store subscription or by UI changes
    pub fn take_redraw(&mut self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.store.dispatch(action) {
            self.set_error(format!("Could not save changes: {err}"));
        }
    }

    /// Show an informational message unless an error is already pending
    pub fn set_info(&mut self, text: impl Into<String>) {
        if self.status.as_ref().is_some_and(|s| s.is_error) {
            return;
        }
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ----- navigation -----

    /// Sidebar entries for the signed-in user
    pub fn views(&self) -> &'static [View] {
        match self.user() {
            Some(user) => View::for_role(user.role),
            None => &[],
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.views().contains(&view) {
            self.view = view;
            self.ui_mode = UiMode::Normal;
            self.request_redraw();
        }
    }

    /// Jump to the n-th sidebar entry (0-based)
    pub fn select_view_index(&mut self, index: usize) {
        if let Some(view) = self.views().get(index).copied() {
            self.set_view(view);
        }
    }

    pub fn next_view(&mut self) {
        let views = self.views();
        if views.is_empty() {
            return;
        }
        let current = views.iter().position(|v| *v == self.view).unwrap_or(0);
        self.set_view(views[(current + 1) % views.len()]);
    }

    /// True when the active view shows a clock that changes every second
    pub fn shows_live_clock(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        match self.view {
            View::Dashboard | View::TimeTracking => true,
            View::Tasks => self.visible_tasks().iter().any(|t| t.has_running_timer()),
            View::Team | View::Reports | View::Notifications => false,
        }
    }

    /// Arm or tear down the ticker to match the active view
    pub fn sync_ticker(&mut self, now: Instant) {
        let active = self.shows_live_clock();
        self.ticker.set_active(active, now);
    }

    // ----- session -----

    pub fn login_next_field(&mut self) {
        let fields = self.login.fields();
        let current = fields.iter().position(|f| *f == self.login.field).unwrap_or(0);
        self.login.field = fields[(current + 1) % fields.len()];
    }

    pub fn login_toggle_mode(&mut self) {
        self.login.sign_up = !self.login.sign_up;
        self.login.field = self.login.fields()[0];
    }

    pub fn login_add_char(&mut self, c: char) {
        match self.login.field {
            LoginField::Email => self.login.email.push(c),
            LoginField::Name => self.login.name.push(c),
            LoginField::Role => {
                if c == ' ' {
                    self.login_cycle_role();
                }
            }
        }
    }

    pub fn login_backspace(&mut self) {
        match self.login.field {
            LoginField::Email => {
                self.login.email.pop();
            }
            LoginField::Name => {
                self.login.name.pop();
            }
            LoginField::Role => {}
        }
    }

    pub fn login_cycle_role(&mut self) {
        self.login.role = match self.login.role {
            Role::Manager => Role::Member,
            Role::Member => Role::Manager,
        };
    }

    /// Submit the login form in its current mode
    pub fn submit_login(&mut self, now: DateTime<Local>) {
        if self.login.sign_up {
            let name = self.login.name.trim().to_string();
            let email = self.login.email.trim().to_string();
            if name.is_empty() || email.is_empty() {
                self.set_error("Name and email are required");
                return;
            }
            self.sign_up(name, email, self.login.role, now);
        } else {
            let email = self.login.email.clone();
            self.demo_login(&email);
        }
    }

    /// Sign in as a demo identity; unknown emails become Mike
    pub fn demo_login(&mut self, email: &str) {
        let user = seed::find_demo_user(email);
        self.start_session(user);
    }

    pub fn sign_up(&mut self, name: String, email: String, role: Role, now: DateTime<Local>) {
        let user = User {
            id: new_id(),
            name,
            email,
            role,
            avatar: None,
            join_date: now.date_naive(),
        };
        self.start_session(user);
    }

    fn start_session(&mut self, user: User) {
        tracing::info!(user = %user.id, role = user.role.label(), "signed in");
        self.dispatch(Action::Login(user.clone()));
        if self.config.seed_demo_data {
            self.seed_for(&user);
        }
        self.login = LoginForm::default();
        self.view = View::Dashboard;
        self.ui_mode = UiMode::Normal;
        self.selected_task = 0;
        self.selected_notification = 0;
        self.set_info(format!("Welcome back, {}", user.first_name()));
    }

    /// Add sample tasks and notifications unless this user already has them.
    /// Another user's samples with the same ids do not count.
    fn seed_for(&mut self, user: &User) {
        for task in seed::mock_tasks(user) {
            let present = owned_tasks(&self.state().tasks, user)
                .iter()
                .any(|t| t.id == task.id);
            if !present {
                self.dispatch(Action::AddTask(task));
            }
        }
        for notification in seed::mock_notifications(&user.id) {
            let present = self
                .state()
                .notifications
                .iter()
                .any(|n| n.id == notification.id && n.user_id == user.id);
            if !present {
                self.dispatch(Action::AddNotification(notification));
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            tracing::info!(user = %user.id, "signed out");
        }
        self.dispatch(Action::Logout);
        self.view = View::Dashboard;
        self.ui_mode = UiMode::Normal;
        self.task_form = None;
        self.search.clear();
        self.task_filter = TaskFilter::All;
    }

    // ----- tasks -----

    /// Owned tasks after the status filter and search
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let state = self.store.state();
        match &state.user {
            Some(user) => filter_tasks(&owned_tasks(&state.tasks, user), self.task_filter, &self.search),
            None => Vec::new(),
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_task).copied()
    }

    pub fn select_next_task(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_task + 1 < len {
            self.selected_task += 1;
        }
    }

    pub fn select_prev_task(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    fn clamp_task_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_task >= len {
            self.selected_task = len.saturating_sub(1);
        }
    }

    pub fn cycle_task_filter(&mut self) {
        self.task_filter = self.task_filter.cycle();
        self.selected_task = 0;
    }

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    pub fn search_add_char(&mut self, c: char) {
        self.search.push(c);
        self.selected_task = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.selected_task = 0;
    }

    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.ui_mode = UiMode::Normal;
        self.selected_task = 0;
    }

    /// Open an empty form; creating tasks is for managers
    pub fn open_new_task_form(&mut self, now: DateTime<Local>) {
        if self.user().is_some_and(User::is_manager) {
            self.task_form = Some(TaskForm::blank(now));
            self.ui_mode = UiMode::TaskForm;
        } else {
            self.set_error("Only managers can create tasks");
        }
    }

    /// Open the form on the selected task for its assignee or a manager
    pub fn open_edit_task_form(&mut self) {
        let (Some(user), Some(task)) = (self.user(), self.selected_task()) else {
            return;
        };
        if task.assignee_id != user.id && !user.is_manager() {
            self.set_error("You cannot edit this task");
            return;
        }
        self.task_form = Some(TaskForm::from_task(task));
        self.ui_mode = UiMode::TaskForm;
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn task_form_next_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            let idx = TASK_FIELDS.iter().position(|f| *f == form.field).unwrap_or(0);
            form.field = TASK_FIELDS[(idx + 1) % TASK_FIELDS.len()];
        }
    }

    pub fn task_form_prev_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            let idx = TASK_FIELDS.iter().position(|f| *f == form.field).unwrap_or(0);
            form.field = TASK_FIELDS[(idx + TASK_FIELDS.len() - 1) % TASK_FIELDS.len()];
        }
    }

    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(text) = self.task_form.as_mut().and_then(TaskForm::text_mut) {
            text.push(c);
        } else if c == ' ' {
            self.task_form_cycle();
        }
    }

    pub fn task_form_backspace(&mut self) {
        if let Some(text) = self.task_form.as_mut().and_then(TaskForm::text_mut) {
            text.pop();
        }
    }

    /// Cycle the choice under the cursor (assignee or priority)
    pub fn task_form_cycle(&mut self) {
        let Some(form) = &mut self.task_form else {
            return;
        };
        match form.field {
            TaskField::Priority => form.priority = form.priority.cycle(),
            TaskField::Assignee => {
                let members = seed::assignable_members();
                let idx = members
                    .iter()
                    .position(|m| m.id == form.assignee_id)
                    .map_or(0, |i| (i + 1) % members.len());
                if let Some(member) = members.get(idx) {
                    form.assignee_id = member.id.clone();
                }
            }
            _ => {}
        }
    }

    /// Create or update the task described by the open form
    pub fn submit_task_form(&mut self, now: DateTime<Local>) {
        let Some(form) = self.task_form.clone() else {
            return;
        };
        if form.title.trim().is_empty() {
            self.set_error("Title is required");
            return;
        }
        let Some(deadline) = form.parsed_deadline() else {
            self.set_error("Invalid Date");
            return;
        };

        match &form.editing {
            Some(id) => self.update_task_from_form(id, &form, deadline, now),
            None => self.create_task(&form, deadline, now),
        }
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
        self.clamp_task_selection();
    }

    fn create_task(&mut self, form: &TaskForm, deadline: DateTime<Local>, now: DateTime<Local>) {
        let Some(user) = self.user().cloned() else {
            return;
        };
        let task = Task {
            id: new_id(),
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            assignee_id: form.assignee_id.clone(),
            assigner_id: user.id.clone(),
            deadline,
            status: TaskStatus::Pending,
            priority: form.priority,
            time_spent: 0,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            timer_started: None,
            approval_notes: None,
        };
        let message = format!("You have been assigned to \"{}\"", task.title);
        let assignee = task.assignee_id.clone();
        tracing::info!(task = %task.id, assignee = %assignee, "task created");

        self.dispatch(Action::AddTask(task));
        self.notify(&assignee, NotificationKind::TaskAssigned, "New Task Assigned", message, now);
        self.set_info("Task created");
    }

    fn update_task_from_form(
        &mut self,
        id: &str,
        form: &TaskForm,
        deadline: DateTime<Local>,
        now: DateTime<Local>,
    ) {
        let Some(existing) = self.state().task(id).cloned() else {
            return;
        };
        let manager = self.user().is_some_and(User::is_manager);
        let task = Task {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            assignee_id: if manager {
                form.assignee_id.clone()
            } else {
                existing.assignee_id.clone()
            },
            deadline,
            priority: form.priority,
            updated_at: now,
            ..existing
        };
        self.dispatch(Action::UpdateTask(task));
        self.set_info("Task updated");
    }

    /// Start or stop the selected task's timer; assignee only
    pub fn toggle_timer(&mut self, now: DateTime<Local>) {
        let (Some(user), Some(task)) = (self.user(), self.selected_task()) else {
            return;
        };
        if task.assignee_id != user.id {
            self.set_error("Only the assignee can track time on this task");
            return;
        }
        let task_id = task.id.clone();
        let running = task.timer_started;
        match running {
            Some(started) => {
                let minutes = u32::try_from(elapsed_seconds(started, now) / 60).unwrap_or(u32::MAX);
                self.dispatch(Action::StopTimer {
                    task_id,
                    minutes,
                    stopped_at: now,
                });
                self.set_info(format!("Timer stopped, {} min logged", minutes));
            }
            None => {
                self.dispatch(Action::SetTimer {
                    task_id,
                    started: now,
                });
                self.set_info("Timer started");
            }
        }
    }

    /// Mark the selected in-progress task completed; assignee only
    pub fn complete_selected(&mut self, now: DateTime<Local>) {
        let (Some(user), Some(task)) = (self.user(), self.selected_task()) else {
            return;
        };
        if task.assignee_id != user.id || task.status != TaskStatus::InProgress {
            self.set_error("Only your in-progress tasks can be completed");
            return;
        }
        let task = Task {
            status: TaskStatus::Completed,
            updated_at: now,
            ..task.clone()
        };
        self.dispatch(Action::UpdateTask(task));
        self.clamp_task_selection();
        self.set_info("Task completed");
    }

    pub fn approve_selected(&mut self, now: DateTime<Local>) {
        self.review_selected(true, now);
    }

    pub fn reject_selected(&mut self, now: DateTime<Local>) {
        self.review_selected(false, now);
    }

    /// Manager verdict on a completed task
    fn review_selected(&mut self, approve: bool, now: DateTime<Local>) {
        let (Some(user), Some(task)) = (self.user(), self.selected_task()) else {
            return;
        };
        if !user.is_manager() || task.status != TaskStatus::Completed {
            self.set_error("Only completed tasks can be reviewed by a manager");
            return;
        }

        let (status, notes, kind, title, message) = if approve {
            (
                TaskStatus::Approved,
                "Task approved",
                NotificationKind::TaskApproved,
                "Task Approved",
                format!("\"{}\" has been approved", task.title),
            )
        } else {
            (
                TaskStatus::Rejected,
                "Task requires revision",
                NotificationKind::TaskRejected,
                "Task Rejected",
                format!("\"{}\" requires revision", task.title),
            )
        };
        let assignee = task.assignee_id.clone();
        let task = Task {
            status,
            approval_notes: Some(notes.to_string()),
            updated_at: now,
            ..task.clone()
        };
        tracing::info!(task = %task.id, status = status.label(), "task reviewed");

        self.dispatch(Action::UpdateTask(task));
        self.notify(&assignee, kind, title, message, now);
        self.clamp_task_selection();
        self.set_info(notes);
    }

    // ----- time tracking -----

    pub fn current_time_log(&self) -> Option<&TimeLog> {
        self.store.state().current_time_log()
    }

    pub fn toggle_clock(&mut self, now: DateTime<Local>) {
        if self.current_time_log().is_some() {
            self.clock_out(now);
        } else {
            self.clock_in(now);
        }
    }

    pub fn clock_in(&mut self, now: DateTime<Local>) {
        let Some(user_id) = self.user().map(|u| u.id.clone()) else {
            return;
        };
        if self.current_time_log().is_some() {
            self.set_error("Already clocked in");
            return;
        }
        let log = TimeLog {
            id: new_id(),
            user_id: user_id.clone(),
            clock_in: now,
            clock_out: None,
            total_hours: None,
            date: day_bucket(now),
            tasks: Vec::new(),
        };
        tracing::info!(user = %user_id, log = %log.id, "clocked in");

        self.dispatch(Action::ClockIn(log));
        let message = format!("You clocked in at {}", format_time(now));
        self.notify(&user_id, NotificationKind::ClockReminder, "Clocked In", message.clone(), now);
        self.set_info(message);
    }

    pub fn clock_out(&mut self, now: DateTime<Local>) {
        let Some(log) = self.current_time_log().cloned() else {
            self.set_error("Not clocked in");
            return;
        };
        let hours = calculate_hours(log.clock_in, now);
        let user_id = log.user_id.clone();
        let closed = TimeLog {
            clock_out: Some(now),
            total_hours: Some(hours),
            ..log
        };
        tracing::info!(user = %user_id, log = %closed.id, hours, "clocked out");

        self.dispatch(Action::ClockOut(closed));
        let message = format!(
            "You clocked out at {}. Total hours: {:.2}h",
            format_time(now),
            hours
        );
        self.notify(&user_id, NotificationKind::ClockReminder, "Clocked Out", message.clone(), now);
        self.set_info(message);
    }

    // ----- notifications -----

    fn notify(
        &mut self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        message: String,
        now: DateTime<Local>,
    ) {
        self.dispatch(Action::AddNotification(Notification {
            id: new_id(),
            user_id: user_id.to_string(),
            kind,
            title: title.to_string(),
            message,
            read: false,
            created_at: now,
            action_url: None,
        }));
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.state().notifications.get(self.selected_notification)
    }

    pub fn select_next_notification(&mut self) {
        if self.selected_notification + 1 < self.state().notifications.len() {
            self.selected_notification += 1;
        }
    }

    pub fn select_prev_notification(&mut self) {
        self.selected_notification = self.selected_notification.saturating_sub(1);
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(id) = self.selected_notification().map(|n| n.id.clone()) {
            self.dispatch(Action::MarkNotificationRead(id));
        }
    }

    pub fn mark_all_read(&mut self) {
        let unread: Vec<String> = self
            .state()
            .notifications
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        for id in unread {
            self.dispatch(Action::MarkNotificationRead(id));
        }
    }

    pub fn delete_selected_notification(&mut self) {
        let Some(id) = self.selected_notification().map(|n| n.id.clone()) else {
            return;
        };
        self.dispatch(Action::DeleteNotification(id));
        let len = self.state().notifications.len();
        if self.selected_notification >= len {
            self.selected_notification = len.saturating_sub(1);
        }
    }

    // ----- reports -----

    pub fn cycle_report_period(&mut self) {
        self.report_period = self.report_period.cycle();
    }

    pub fn export_report(&mut self) {
        self.set_info("Export is not available yet");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
