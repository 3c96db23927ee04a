//! Integration tests for the backend HTTP endpoints
//!
//! These tests verify that:
//! - A valid numeric payload yields the success envelope and a database write
//! - Non-numeric and malformed payloads yield client errors and no write
//! - The root endpoint serves the welcome message

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::MockServer;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::*;

#[tokio::test]
async fn test_valid_reading_returns_success() {
    let mock_influx = MockServer::start().await;
    mount_accepting_influx(&mock_influx).await;

    let (addr, writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/metrics/temperature"))
        .json(&json!({ "temperature": 21.5 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Temperature data recorded.");

    // Force the batch out and check the line protocol that reached the db
    writer.flush().await.unwrap();

    let bodies = received_write_bodies(&mock_influx).await;
    assert_eq!(bodies.len(), 1);
    assert!(
        bodies[0].starts_with("temperature_reading value=21.5 "),
        "unexpected line protocol: {}",
        bodies[0]
    );
}

#[tokio::test]
async fn test_write_request_carries_auth_and_bucket() {
    let mock_influx = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/write"))
        .and(query_param("org", "test-org"))
        .and(query_param("bucket", "temperature_metrics"))
        .and(query_param("precision", "ns"))
        .and(header("Authorization", "Token test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_influx)
        .await;

    let (addr, writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    client
        .post(format!("http://{addr}/metrics/temperature"))
        .json(&json!({ "temperature": 19.25 }))
        .send()
        .await
        .unwrap();

    writer.flush().await.unwrap();

    // Mock expectations are verified on drop
}

#[tokio::test]
async fn test_non_numeric_payload_is_rejected() {
    let mock_influx = MockServer::start().await;
    mount_accepting_influx(&mock_influx).await;

    let (addr, writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/metrics/temperature"))
        .json(&json!({ "temperature": "hot" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing must reach the database
    writer.flush().await.unwrap();
    assert!(received_write_bodies(&mock_influx).await.is_empty());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let mock_influx = MockServer::start().await;
    mount_accepting_influx(&mock_influx).await;

    let (addr, _writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/metrics/temperature"))
        .json(&json!({ "humidity": 40.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let mock_influx = MockServer::start().await;
    mount_accepting_influx(&mock_influx).await;

    let (addr, _writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/metrics/temperature"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert!(
        response.status().is_client_error(),
        "expected a client error, got {}",
        response.status()
    );
}

#[tokio::test]
async fn test_home_returns_welcome_message() {
    let mock_influx = MockServer::start().await;
    mount_accepting_influx(&mock_influx).await;

    let (addr, _writer) = spawn_test_backend(&mock_influx.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to the temperature metrics backend!");
}
