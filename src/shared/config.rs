//! Application configuration. Data directory and state file location.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_STATE_FILE: &str = "todos.json";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding the state file. Read from TODO_SLIM_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// State file name, or an absolute path. Read from TODO_SLIM_STATE_FILE.
    #[serde(default)]
    pub state_file: Option<String>,
}

impl AppConfig {
    /// Loads `.env`, then `TODO_SLIM_*` env vars and the optional file named by TODO_SLIM_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TODO_SLIM_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Env wins over the file.
        c = c.add_source(config::Environment::with_prefix("TODO_SLIM"));
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to ./data.
    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Returns the state file path. Relative names resolve inside the data directory.
    pub fn state_path(&self) -> PathBuf {
        let file = PathBuf::from(self.state_file.as_deref().unwrap_or(DEFAULT_STATE_FILE));
        if file.is_absolute() {
            file
        } else {
            self.data_dir_or_default().join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_dir_or_default(), PathBuf::from("./data"));
        assert_eq!(cfg.state_path(), PathBuf::from("./data").join("todos.json"));
    }

    #[test]
    fn test_state_file_relative_to_data_dir() {
        let cfg = AppConfig {
            data_dir: Some("/var/lib/todo".to_string()),
            state_file: Some("mine.json".to_string()),
        };
        assert_eq!(cfg.state_path(), PathBuf::from("/var/lib/todo/mine.json"));
    }

    #[test]
    fn test_absolute_state_file_wins() {
        let cfg = AppConfig {
            data_dir: Some("/var/lib/todo".to_string()),
            state_file: Some("/tmp/elsewhere.json".to_string()),
        };
        assert_eq!(cfg.state_path(), PathBuf::from("/tmp/elsewhere.json"));
    }
}
