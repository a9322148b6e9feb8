// Global error handling for HTTP middleware layers

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    BoxError,
};
use std::{error::Error, sync::Arc};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

use crate::config::state::AppState;
use crate::rendering::{media_type::accept_header, AppError, UnsupportedMediaType};

/// Maps errors raised by tower layers to HTTP responses. Oversized bodies
/// never get here: body extractors answer 413 themselves under
/// `DefaultBodyLimit`.
pub async fn handle_global_error(err: BoxError) -> Response {
    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(&*err).is_some() {
        return StatusCode::REQUEST_TIMEOUT.into_response();
    }

    // Otherwise, a 500 rendered like any other unhandled error
    AppError::new("Unhandled middleware error")
        .with_kind("MiddlewareError")
        .caused_by(err)
        .into_response()
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

/// Middleware that renders `AppError`s left in response extensions as a
/// negotiated 500 body. The Accept header is read before the request moves
/// down the stack.
pub async fn render_errors(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let accept: String = accept_header(req.headers());
    let mut response: Response<Body> = next.run(req).await;

    let Some(error) = response.extensions_mut().remove::<Arc<AppError>>() else {
        return response;
    };

    match state.renderer.write_response(&accept, &mut response, &*error) {
        Ok(()) => response,
        Err(err) => not_acceptable(err),
    }
}

// No representation fits the client, so there is no body to send at all
fn not_acceptable(err: UnsupportedMediaType) -> Response<Body> {
    warn!("Cannot render error response: {err}");
    StatusCode::NOT_ACCEPTABLE.into_response()
}
