//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    // The helper configures a one second server timeout; /timeout sleeps longer.
    let base_url: String = common::spawn_app(false);

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/timeout", base_url))
                .send()
                .await
        }
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
}
