use crate::persistence::files::atomic_write;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.json";

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Generate sample tasks and notifications on sign-in
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
    /// tracing filter directive, overridden by TOKIDO_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Interval between clock redraws, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_seed() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tick_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed(),
            log_filter: default_log_filter(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Load config.json, falling back to defaults when the file is absent
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let path = config_path(data_dir);

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Malformed config file {}", path.display()))?;
    Ok(config)
}

pub fn save_config(data_dir: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(config_path(data_dir), &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.seed_demo_data);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            seed_demo_data: false,
            log_filter: "tokido=debug".to_string(),
            tick_ms: 500,
        };

        save_config(temp_dir.path(), &config).unwrap();
        assert_eq!(load_config(temp_dir.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(config_path(temp_dir.path()), r#"{ "tick_ms": 250 }"#).unwrap();

        let config = load_config(temp_dir.path()).unwrap();
        assert_eq!(config.tick_ms, 250);
        assert!(config.seed_demo_data);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(config_path(temp_dir.path()), "tick_ms = 5").unwrap();
        assert!(load_config(temp_dir.path()).is_err());
    }
}
