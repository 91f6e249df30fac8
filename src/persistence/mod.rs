pub mod files;
pub mod snapshot;
pub mod storage;

pub use files::{ensure_data_dir, init_local_data_dir};
pub use snapshot::{
    load_snapshot, write_key, write_user, Snapshot, NOTIFICATIONS_KEY, TASKS_KEY, TIME_LOGS_KEY,
};
pub use storage::{FileStorage, Storage, StorageError};

#[cfg(test)]
pub use storage::MemoryStorage;
