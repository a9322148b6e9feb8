// Diagnostic route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the health and error pipeline endpoints
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handler::status_handler))
        // Fails with a chained AppError, rendered per the Accept header
        .route("/error", get(handler::error_test_handler))
        // Sleeps past the configured timeout
        .route("/timeout", get(handler::timeout_test_handler))
        // Reads the body, so MAX_REQUEST_BODY_SIZE applies
        .route("/echo", post(handler::echo_handler))
}
