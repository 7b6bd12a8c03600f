use crate::errors::{AppError, AppResult};
use crate::models::livestock::LivestockField;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the configuration directory (used by tests and portable installs).
pub const HOME_ENV: &str = "HERDBOOK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the CSV collections. `~/` is expanded.
    pub data_dir: String,
    #[serde(default = "default_report_field")]
    pub report_field: LivestockField,
    #[serde(default)]
    pub report_descending: bool,
}

fn default_report_field() -> LivestockField {
    LivestockField::Weight
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            report_field: default_report_field(),
            report_descending: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("herdbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".herdbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("herdbook.conf")
    }

    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Build the configuration for `init`, keeping settings of an existing
    /// file. The file is only written outside test mode.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::load()?;

        if let Some(dir) = custom_data_dir {
            let p = PathBuf::from(&dir);
            config.data_dir = if p.is_absolute() || dir.starts_with("~/") {
                dir
            } else {
                env::current_dir()?.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
