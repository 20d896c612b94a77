use crate::models::worker::DEFAULT_VACATION_DAYS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Default annual vacation allowance for newly added workers.
    #[serde(default = "default_vacation_days")]
    pub vacation_days_per_year: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_vacation_days() -> i64 {
    DEFAULT_VACATION_DAYS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            vacation_days_per_year: default_vacation_days(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Platform configuration directory: `%APPDATA%\presenza` on Windows,
    /// `~/.presenza` elsewhere.
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let dir = base.unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            dir.join("presenza")
        } else {
            dir.join(".presenza")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presenza.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("presenza.sqlite")
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable. Never panics: a broken config must not take
    /// the CLI down.
    pub fn load() -> Self {
        fs::read_to_string(Self::config_file())
            .ok()
            .and_then(|content| serde_yaml::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn resolve_db_path(dir: &Path, custom_name: Option<String>) -> PathBuf {
        match custom_name {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        }
    }

    /// Create the config directory, the config file (skipped in test
    /// mode) and an empty database file when missing. Returns the
    /// resolved database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = Self::resolve_db_path(&dir, custom_name);

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Failed to serialize config: {}", e)))?;
            fs::write(Self::config_file(), yaml)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
