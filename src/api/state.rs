//! Application state for the Attendance Gap Analysis Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineSettings;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded engine settings.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine settings.
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates a new application state with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_settings() {
        let state = AppState::new(EngineSettings::default());
        assert_eq!(state.settings().date_format, "%Y-%m-%d");
    }
}
