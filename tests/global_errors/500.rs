//! tests/global_errors/500.rs
//! Ensures that an unhandled error maps to an HTTP 500 whose body is
//! rendered in the representation negotiated from the Accept header.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_500_in_each_negotiated_type() {
    let base_url: String = common::spawn_app(false);

    for (accept, content_type, start_of_body) in common::NEGOTIATION_CASES {
        let resp: reqwest::Response = common::get_error(&base_url, accept).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "accept = {accept}");
        assert_eq!(common::content_type(&resp), content_type, "accept = {accept}");

        let body: String = resp.text().await.unwrap();
        assert!(body.starts_with(start_of_body), "accept = {accept}: {body}");

        // Details are off: nothing about the error itself leaks
        assert!(!body.contains("Oops"), "accept = {accept}");
        assert!(!body.contains("handler.rs"), "accept = {accept}");
    }
}

#[tokio::test]
async fn returns_500_with_details_in_each_negotiated_type() {
    let base_url: String = common::spawn_app(true);

    for (accept, content_type, start_of_body) in common::NEGOTIATION_CASES {
        let resp: reqwest::Response = common::get_error(&base_url, accept).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "accept = {accept}");
        assert_eq!(common::content_type(&resp), content_type, "accept = {accept}");

        let body: String = resp.text().await.unwrap();
        assert!(body.starts_with(start_of_body), "accept = {accept}: {body}");
        assert!(body.contains("Oops"), "accept = {accept}");
        assert!(body.contains("Opps before"), "accept = {accept}");
        assert!(body.contains("src/api/diagnostics/handler.rs"), "accept = {accept}");
    }
}

#[tokio::test]
async fn json_details_carry_the_whole_chain() {
    let base_url: String = common::spawn_app(true);

    let resp: reqwest::Response = common::get_error(&base_url, "application/json").await;
    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["message"], "Application Error");
    assert_eq!(json["exception"][0]["type"], "AppError");
    assert_eq!(json["exception"][0]["code"], 1);
    assert_eq!(json["exception"][0]["message"], "Oops");
    assert_eq!(json["exception"][1]["message"], "Opps before");
    assert_eq!(json["exception"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn identical_requests_render_identically() {
    let base_url: String = common::spawn_app(false);

    let first: String = common::get_error(&base_url, "text/html").await.text().await.unwrap();
    let second: String = common::get_error(&base_url, "text/html").await.text().await.unwrap();

    assert_eq!(first, second);
}
