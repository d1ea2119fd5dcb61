//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns HTTP 404 with a JSON body.

#[path = "../common/mod.rs"]
mod common;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/unknown", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn returns_404_for_any_method_on_unknown_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/nested/unknown/path", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
