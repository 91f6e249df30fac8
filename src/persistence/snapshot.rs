use super::storage::{Storage, StorageError};
use crate::domain::{Notification, Task, TimeLog, User};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const USER_KEY: &str = "tokido-user";
pub const TASKS_KEY: &str = "tokido-tasks";
pub const TIME_LOGS_KEY: &str = "tokido-timelogs";
pub const NOTIFICATIONS_KEY: &str = "tokido-notifications";

/// Everything read back from storage at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub user: Option<User>,
    pub tasks: Vec<Task>,
    pub time_logs: Vec<TimeLog>,
    pub notifications: Vec<Notification>,
}

/// Read all four keys; a malformed key fails the whole load
pub fn load_snapshot(storage: &dyn Storage) -> Result<Snapshot, StorageError> {
    Ok(Snapshot {
        user: read_key(storage, USER_KEY)?,
        tasks: read_key(storage, TASKS_KEY)?.unwrap_or_default(),
        time_logs: read_key(storage, TIME_LOGS_KEY)?.unwrap_or_default(),
        notifications: read_key(storage, NOTIFICATIONS_KEY)?.unwrap_or_default(),
    })
}

fn read_key<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Write one serialized slice under `key`
pub fn write_key<T: Serialize + ?Sized>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)
}

/// Write the current user, or clear the key when signed out
pub fn write_user(storage: &mut dyn Storage, user: Option<&User>) -> Result<(), StorageError> {
    match user {
        Some(user) => write_key(storage, USER_KEY, user),
        None => storage.remove(USER_KEY),
    }
}
