// Application state management with singleton pattern

use std::sync::Arc;
use once_cell::sync::Lazy;

use crate::config::environment::EnvironmentVariables;
use crate::rendering::ErrorRenderer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub renderer: ErrorRenderer,
}

impl AppState {
    /// Builds the state for a given configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        let renderer: ErrorRenderer = ErrorRenderer::new(environment.display_error_details);

        if renderer.display_error_details() && environment.environment == "production" {
            tracing::warn!("DISPLAY_ERROR_DETAILS is enabled in production; error internals will be sent to clients");
        }

        Self {
            environment: Arc::new(environment),
            renderer,
        }
    }

    /// Returns the singleton instance built from the process environment
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(|| {
            AppState::new(EnvironmentVariables::instance().clone())
        });
        &INSTANCE
    }
}
