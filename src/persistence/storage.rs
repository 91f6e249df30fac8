use super::files::{atomic_write, read_file, remove_file};
use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing a storage key
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access `{key}` in storage")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stored `{key}` is malformed")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable key -> serialized snapshot store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        read_file(self.path_for(key)).map_err(|err| io_error(key, err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        atomic_write(self.path_for(key), value).map_err(|err| io_error(key, err))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        remove_file(self.path_for(key)).map_err(|err| io_error(key, err))
    }
}

/// Volatile storage for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        assert_eq!(storage.get("tokido-tasks").unwrap(), None);

        storage.set("tokido-tasks", "[]").unwrap();
        assert_eq!(storage.get("tokido-tasks").unwrap(), Some("[]".to_string()));
        assert!(temp_dir.path().join("tokido-tasks.json").exists());

        storage.remove("tokido-tasks").unwrap();
        assert_eq!(storage.get("tokido-tasks").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_dir_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("missing"));

        let err = storage.set("tokido-user", "{}").unwrap_err();
        assert!(matches!(err, StorageError::Io { ref key, .. } if key == "tokido-user"));
    }
}
