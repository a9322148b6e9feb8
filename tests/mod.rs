//! tests/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

use std::collections::HashMap;

use axum::{serve, Router};
use error_renderer::config::{environment::EnvironmentVariables, state::AppState};
use error_renderer::core::server::create_app;
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app(display_error_details: bool) -> String {
    // * Start from defaults so a local .env can't change the outcome.
    let mut env: EnvironmentVariables = EnvironmentVariables::from_vars(&HashMap::new())
        .expect("Default configuration");
    env.display_error_details = display_error_details;
    env.default_timeout_seconds = 1;

    // * Build the application exactly like main() does.
    let app: Router = create_app(AppState::new(env));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// Accept header, expected Content-Type and expected start of body
pub const NEGOTIATION_CASES: [(&str, &str, &str); 6] = [
    ("application/json", "application/json", "{"),
    ("application/vnd.api+json", "application/json", "{"),
    ("application/xml", "application/xml", "<error>"),
    ("application/hal+xml", "application/xml", "<error>"),
    ("text/xml", "text/xml", "<error>"),
    ("text/html", "text/html", "<html>"),
];

/// GETs `/error` with the given Accept header.
pub async fn get_error(base_url: &str, accept: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("{}/error", base_url))
        .header(reqwest::header::ACCEPT, accept)
        .send()
        .await
        .expect("Failed to make request.")
}

/// Content-Type of a response as a string
pub fn content_type(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
