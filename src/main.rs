// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use error_renderer::config::state::AppState;
use error_renderer::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: &'static AppState = AppState::instance();
    let app: Router = create_app(state.clone());

    let listener: TcpListener = setup_listener(&state.environment).await?;

    tracing::info!(
        "Server listening on: {} (display_error_details = {})",
        listener.local_addr()?,
        state.renderer.display_error_details()
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
