use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Settings;
use crate::timer::{CYCLES_BEFORE_LONG_REST, LONG_REST_MINUTES};

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode settings: {source}")]
    EncodeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Settings validation failed: {message}")]
    ValidationError { message: String },
}

impl Settings {
    /// Returns the path to the settings file.
    ///
    /// Uses `~/.config/pomodo/settings.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn settings_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pomodo").join("settings.toml")
    }

    /// Loads settings from the default settings file.
    ///
    /// - If the file doesn't exist, returns `Settings::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails; callers
    ///   recover by falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings to the default settings file, creating the parent
    /// directory when missing. Synchronous: the session must be on disk
    /// before the process exits.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::EncodeError { source: e })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the settings.
    ///
    /// Checks that durations are positive and that the persisted session
    /// progress lies inside the boundary of the phase it claims to be in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.durations.work_minutes == 0 || self.durations.rest_minutes == 0 {
            return Err(ConfigError::ValidationError {
                message: "Phase durations must be positive".to_string(),
            });
        }

        if self.session.second > 59 {
            return Err(ConfigError::ValidationError {
                message: format!("Elapsed second {} is out of range", self.session.second),
            });
        }

        if self.session.cycle > CYCLES_BEFORE_LONG_REST {
            return Err(ConfigError::ValidationError {
                message: format!("Cycle count {} is out of range", self.session.cycle),
            });
        }

        let boundary = if !self.session.resting {
            self.durations.work_minutes
        } else if self.session.cycle == CYCLES_BEFORE_LONG_REST {
            LONG_REST_MINUTES
        } else {
            self.durations.rest_minutes
        };

        if self.session.minute >= boundary {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Elapsed minute {} is past the {}-minute phase boundary",
                    self.session.minute, boundary
                ),
            });
        }

        Ok(())
    }
}
