use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Name written in the identity block of every exported sheet.
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Suggestions for the overtime reason; any other text is accepted too.
    #[serde(default = "default_overtime_reasons")]
    pub overtime_reasons: Vec<String>,
    /// Google Sheets document id used by `sync`.
    #[serde(default)]
    pub spreadsheet_id: String,
    /// Service-account key file used by `sync`.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
    /// Pause between two per-date writes during `sync`.
    #[serde(default = "default_sync_delay_ms")]
    pub sync_delay_ms: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_name() -> String {
    "Refia Karsista".to_string()
}
pub(crate) fn default_overtime_reasons() -> Vec<String> {
    [
        "Deadline proyek",
        "Bug fix urgent",
        "Support implementasi",
        "Maintenance sistem",
        "Lainnya...",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_credentials_path() -> String {
    Config::config_dir()
        .join("credentials.json")
        .to_string_lossy()
        .to_string()
}
fn default_sync_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_name: default_name(),
            overtime_reasons: default_overtime_reasons(),
            spreadsheet_id: String::new(),
            credentials_path: default_credentials_path(),
            sync_delay_ms: default_sync_delay_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    ///
    /// `TIMESHEET_HOME` overrides it (used by tests).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TIMESHEET_HOME")
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Expand a leading `~/` to the home directory.
    pub fn expand_home(path: &str) -> PathBuf {
        match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        }
    }

    /// Resolve a user-supplied database name against the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Self::expand_home(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// With `is_test` the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            config.database = Self::resolve_db_path(&name).to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let db_path = PathBuf::from(&config.database);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
