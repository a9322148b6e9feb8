// Diagnostic handlers

use axum::{body::Bytes, extract::State, http::StatusCode};
use serde_json::json;
use std::backtrace::Backtrace;
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::rendering::AppError;
use crate::utils::response_handler::HandlerResponse;

/// Returns API status and how errors are currently rendered
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment.as_ref(),
            "display_error_details": state.renderer.display_error_details(),
        }))
        .message("API is running successfully")
}

/// Always fails with a two-level error chain to exercise error rendering
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(_state))]
pub async fn error_test_handler(State(_state): State<AppState>) -> Result<HandlerResponse, AppError> {
    info!("Testing deliberate 500 error");

    let cause: AppError = AppError::new("Opps before");
    Err(AppError::new("Oops").with_code(1).caused_by(cause))
}

/// Sleeps beyond the configured timeout to trigger the timeout layer
#[instrument(skip(state))]
pub async fn timeout_test_handler(State(state): State<AppState>) -> HandlerResponse {
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;

    info!(
        "Testing timeout: sleeping for {} seconds (timeout is set to {} seconds)",
        timeout_seconds + 2,
        timeout_seconds
    );

    tokio::time::sleep(std::time::Duration::from_secs(timeout_seconds + 2)).await;

    // Should never be reached due to timeout
    HandlerResponse::new(StatusCode::OK).message("Timeout test completed (this shouldn't happen)")
}

/// Reports the size of the request body; oversized bodies are refused with 413
#[instrument(skip(state, body))]
pub async fn echo_handler(State(state): State<AppState>, body: Bytes) -> HandlerResponse {
    let max_size: usize = state.environment.max_request_body_size;
    let body_size: usize = body.len();

    info!("Echo: received {} bytes (max allowed: {} bytes)", body_size, max_size);

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "received_body_size": body_size,
            "max_allowed_size": max_size,
        }))
        .message(format!("Successfully processed body of {} bytes", body_size))
}
