//! Application state for the shift calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the data-access backend.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    backend: Arc<dyn Backend>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, backend: Arc<dyn Backend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the backend.
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }
}
