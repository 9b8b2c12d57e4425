//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calendar
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::access::PermissionTable;
use crate::error::{EngineError, EngineResult};
use crate::layout::LayoutMetrics;

use super::types::{AppConfig, CalendarSettings};

/// Loads and provides access to the calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── calendar.yaml        # Bar metrics and highlight limit
/// ├── permissions.yaml     # Resource minimum levels
/// └── fixtures/            # Seed data for the in-memory backend
///     ├── departments.yaml
///     ├── profiles.yaml
///     └── shifts.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Lane height: {}px", loader.metrics().lane_height_px);
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar = load_yaml::<CalendarSettings>(&path.join("calendar.yaml"))?;
        let permissions = load_yaml::<PermissionTable>(&path.join("permissions.yaml"))?;

        debug!(
            path = %path.display(),
            highlight_limit = calendar.highlight_limit,
            "Loaded calendar configuration"
        );

        Ok(Self {
            config: AppConfig::new(calendar, permissions),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the bar metrics.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.config.calendar().layout
    }

    /// Returns how many multi-day shifts to highlight.
    pub fn highlight_limit(&self) -> usize {
        self.config.calendar().highlight_limit
    }

    /// Returns the permission table.
    pub fn permissions(&self) -> &PermissionTable {
        self.config.permissions()
    }
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
