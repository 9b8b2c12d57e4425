//! Configuration loading and management for the shift calendar.
//!
//! This module loads calendar presentation settings and the permission
//! table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Highlighting {} shifts", config.highlight_limit());
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::ConfigLoader;
pub use types::{AppConfig, CalendarSettings, DEFAULT_HIGHLIGHT_LIMIT};
