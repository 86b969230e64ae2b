//! # Server Endpoint Tests
//!
//! Probes, CORS headers, and payload rejection for the `ayni-server` router.

mod common;

use anyhow::Result;
use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn test_root_and_health_check_endpoints() -> Result<()> {
    let app = TestApp::spawn().await?;

    let root_response = app.client.get(format!("{}/", app.address)).send().await?;
    assert!(root_response.status().is_success());
    let body: Value = root_response.json().await?;
    assert_eq!(
        body["message"],
        "Ayni ChatBot API funcionando correctamente 🤖"
    );

    let health_response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await?;
    assert!(health_response.status().is_success());
    assert_eq!("OK", health_response.text().await?);

    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_with_credentials() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .request(reqwest::Method::OPTIONS, format!("{}/chat", app.address))
        .header("Origin", "https://widget.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://widget.example.com"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");

    Ok(())
}

#[tokio::test]
async fn test_chat_malformed_json_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    // This JSON is syntactically invalid (missing closing brace).
    let malformed_body = r#"{"message": "hola""#;

    let response = app
        .client
        .post(format!("{}/chat", app.address))
        .header("Content-Type", "application/json")
        .body(malformed_body)
        .send()
        .await?;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await?;
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_chat_missing_message_field_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.post_chat(json!({ "username": "rosa" })).await?;

    assert_eq!(422, response.status().as_u16());
    let body: Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("missing field `message`"));

    Ok(())
}
