pub mod enums;
pub mod models;

pub use enums::{NotificationKind, Priority, Role, TaskStatus, UiMode, View};
pub use models::{Notification, Task, TimeLog, User};
