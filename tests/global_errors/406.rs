//! tests/global_errors/406.rs
//! Ensures that an error requested in an unsupported media type is refused
//! instead of being rendered in a guessed representation.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_406_for_unknown_media_type() {
    let base_url: String = common::spawn_app(true);

    let resp: reqwest::Response = common::get_error(&base_url, "unknown/type").await;

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(common::content_type(&resp), "");

    let body: String = resp.text().await.unwrap();
    assert!(body.is_empty());
}
