//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::display::is_valid_date_format;
use crate::error::{TrackerError, TrackerResult};

use super::types::{AppConfig, DisplayConfig, ServerConfig, StorageConfig};

/// Loads and provides access to the tracker configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind_address: "127.0.0.1:8080"
/// storage:
///   backend: sqlite
///   database_url: "sqlite://shifttracker.db"
///   max_connections: 5
/// display:
///   currency_symbol: "₽"
///   date_format: "%d.%m.%Y"
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracker.yaml")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), shift_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|e| match e {
            TrackerError::ConfigParseError { message, .. } => TrackerError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> TrackerResult<Self> {
        // an empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            TrackerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        if !is_valid_date_format(&config.display.date_format) {
            return Err(TrackerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: format!(
                    "display.date_format '{}' is not a valid strftime pattern",
                    config.display.date_format
                ),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the storage settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }
}
