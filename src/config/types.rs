//! Configuration types for the shift calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::access::PermissionTable;
use crate::layout::LayoutMetrics;

/// Number of multi-day shifts highlighted below the calendar by default.
pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 4;

fn default_highlight_limit() -> usize {
    DEFAULT_HIGHLIGHT_LIMIT
}

/// Calendar presentation settings from `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarSettings {
    /// Pixel measurements of calendar bars.
    #[serde(default)]
    pub layout: LayoutMetrics,
    /// How many multi-day shifts to highlight.
    #[serde(default = "default_highlight_limit")]
    pub highlight_limit: usize,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            layout: LayoutMetrics::default(),
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    calendar: CalendarSettings,
    permissions: PermissionTable,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(calendar: CalendarSettings, permissions: PermissionTable) -> Self {
        Self {
            calendar,
            permissions,
        }
    }

    /// Returns the calendar settings.
    pub fn calendar(&self) -> &CalendarSettings {
        &self.calendar
    }

    /// Returns the permission table.
    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(CalendarSettings::default(), PermissionTable::default())
    }
}
