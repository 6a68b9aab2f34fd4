//! tests/ping.rs
//! End-to-end checks for GET /ping against a spawned server.

mod common;

use reqwest::{header::CONTENT_TYPE, StatusCode};

#[tokio::test]
async fn ping_returns_200_and_pong() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/ping", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type: String = resp.headers()[CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"), "unexpected content type {content_type}");

    assert_eq!(resp.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn ping_is_idempotent_regardless_of_headers() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    for i in 0..5 {
        let resp: reqwest::Response = client
            .get(format!("{}/ping", base_url))
            .header("x-request-id", i.to_string())
            .header("accept", "application/json")
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "pong");
    }
}

#[tokio::test]
async fn post_to_ping_is_not_ok() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/ping", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_ne!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
