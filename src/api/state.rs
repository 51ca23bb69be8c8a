//! Application state for the Shift Payroll Engine API.
//!
//! Handlers receive this context explicitly; there is no module-level
//! mutable state.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Built once at startup and cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ConfigLoader::from(PayrollConfig::default()));
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
