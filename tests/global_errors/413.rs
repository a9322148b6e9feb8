//! tests/global_errors/413.rs
//! Ensures that sending a large payload (> 2MB by default) triggers 413,
//! while a body within the limit is read normally.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app(false);

    // Generate a payload slightly larger than 2MB.
    let oversized_payload: Vec<u8> = vec![b'X'; 2_097_152 + 100];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn reads_payload_within_global_limit() {
    let base_url: String = common::spawn_app(false);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/echo", base_url))
        .body(vec![b'X'; 1024])
        .send()
        .await
        .expect("Failed to send request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["received_body_size"], 1024);
    assert_eq!(json["data"]["max_allowed_size"], 2_097_152);
}
