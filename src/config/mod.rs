//! User settings
//!
//! Provides [`Settings`] with defaults for the Hg-197m/Hg-197g pair. Settings are
//! stored as JSON under the platform configuration directory and can be read or
//! changed one key at a time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::report::{IsotopeLabels, ReportContext};
use crate::units::{ActivityUnit, ConversionError};

/// Default parent (Hg-197m) half-life in hours
pub const DEFAULT_HALF_LIFE_PARENT: f64 = 23.8;
/// Default daughter (Hg-197g) half-life in hours
pub const DEFAULT_HALF_LIFE_DAUGHTER: f64 = 64.14;

/// Keys accepted by [`Settings::get`] and [`Settings::set`]
pub const KEYS: [&str; 7] = [
    "parent_label",
    "daughter_label",
    "activity_unit",
    "half_life_parent",
    "half_life_daughter",
    "save_folder",
    "log_level",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize settings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown setting '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    Unit(#[from] ConversionError),
}

/// User-adjustable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display name of the metastable parent
    pub parent_label: String,
    /// Display name of the ground-state daughter
    pub daughter_label: String,
    /// Unit the activities are entered in
    pub activity_unit: ActivityUnit,
    /// Parent half-life (h) used when none is given
    pub half_life_parent: f64,
    /// Daughter half-life (h) used when none is given
    pub half_life_daughter: f64,
    /// Folder exports are written to; `None` means the working directory
    pub save_folder: Option<PathBuf>,
    /// Log filter (e.g. "info", "hgquant=debug")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        let labels = IsotopeLabels::default();
        Self {
            parent_label: labels.parent,
            daughter_label: labels.daughter,
            activity_unit: ActivityUnit::default(),
            half_life_parent: DEFAULT_HALF_LIFE_PARENT,
            half_life_daughter: DEFAULT_HALF_LIFE_DAUGHTER,
            save_folder: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Default settings file location, `<config dir>/hgquant/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hgquant")
            .join("settings.json")
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text).map_err(io_err)?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Current value of a setting as text
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "parent_label" => self.parent_label.clone(),
            "daughter_label" => self.daughter_label.clone(),
            "activity_unit" => self.activity_unit.to_string(),
            "half_life_parent" => self.half_life_parent.to_string(),
            "half_life_daughter" => self.half_life_daughter.to_string(),
            "save_folder" => self
                .save_folder
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "log_level" => self.log_level.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Change a setting from text
    ///
    /// Half-lives must parse as positive numbers; an empty `save_folder` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "parent_label" | "daughter_label" | "log_level" if value.is_empty() => {
                return Err(invalid())
            }
            "parent_label" => self.parent_label = value.to_string(),
            "daughter_label" => self.daughter_label = value.to_string(),
            "log_level" => self.log_level = value.to_string(),
            "activity_unit" => self.activity_unit = value.parse()?,
            "half_life_parent" | "half_life_daughter" => {
                let hours: f64 = value.parse().map_err(|_| invalid())?;
                if !(hours.is_finite() && hours > 0.0) {
                    return Err(invalid());
                }
                if key == "half_life_parent" {
                    self.half_life_parent = hours;
                } else {
                    self.half_life_daughter = hours;
                }
            }
            "save_folder" => {
                self.save_folder = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn labels(&self) -> IsotopeLabels {
        IsotopeLabels {
            parent: self.parent_label.clone(),
            daughter: self.daughter_label.clone(),
        }
    }

    /// Labels and unit for rendering reports
    pub fn report_context(&self) -> ReportContext {
        ReportContext::new(self.labels(), self.activity_unit)
    }

    /// Folder exports go to
    pub fn export_dir(&self) -> PathBuf {
        self.save_folder
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
