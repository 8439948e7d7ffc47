//! In-process tests of the HTTP API.

mod test_utils;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use outreach_core::GeneratedMessage;
use outreach_server::ErrorBody;
use serde_json::{Value, json};
use test_utils::{FixedDriver, VALID_JSON, app, post_json};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_valid_request_returns_message() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let body = json!({
        "purpose": "partnership",
        "recipientRole": "CTO",
        "tone": "friendly",
        "context": "We met at RustConf"
    });

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let message: GeneratedMessage = body_json(response).await?;
    assert_eq!(message.body(), "Line one.\nLine two.");
    assert_eq!(message.closing(), "Cheers,");
    assert_eq!(driver.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_response_has_exactly_five_keys() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let body = json!({"purpose": "p", "recipientRole": "r", "tone": "t"});

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;
    let value: Value = body_json(response).await?;

    let keys: Vec<&str> = value
        .as_object()
        .expect("object body")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 5);
    for key in ["subject", "greeting", "body", "call_to_action", "closing"] {
        assert!(keys.contains(&key), "missing {}", key);
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_tone_is_rejected_without_calling_pipeline() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let body = json!({"purpose": "partnership", "recipientRole": "CTO"});

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = body_json(response).await?;
    assert_eq!(error.error, "Missing required fields");
    assert_eq!(error.kind, "missing_fields");
    assert_eq!(driver.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_empty_purpose_counts_as_missing() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let body = json!({"purpose": "", "recipientRole": "CTO", "tone": "warm"});

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = body_json(response).await?;
    assert_eq!(error.error, "Missing required fields");
    assert_eq!(driver.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_omitted_context_reaches_pipeline_as_empty() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let body = json!({"purpose": "p", "recipientRole": "r", "tone": "t"});

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let prompts = driver.system_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Context: \n"));
    assert!(!prompts[0].contains("null"));
    Ok(())
}

#[tokio::test]
async fn test_exhausted_pipeline_returns_server_error() -> anyhow::Result<()> {
    let driver = FixedDriver::new("I'm sorry, I can't write JSON today.");
    let body = json!({"purpose": "p", "recipientRole": "r", "tone": "t"});

    let response = app(&driver).oneshot(post_json(&body.to_string())).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = body_json(response).await?;
    assert_eq!(error.kind, "generation_failed");
    assert_eq!(
        error.error,
        "Failed to generate valid message after 3 retries. Last AI response: \"I'm sorry, I can't write JSON today.\""
    );
    assert_eq!(driver.calls(), 3);
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_client_error() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);

    let response = app(&driver).oneshot(post_json("purpose=p&tone=t")).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = body_json(response).await?;
    assert_eq!(error.kind, "invalid_body");
    assert_eq!(driver.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> anyhow::Result<()> {
    let driver = FixedDriver::new(VALID_JSON);
    let request = Request::builder().uri("/health").body(Body::empty())?;

    let response = app(&driver).oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let value: Value = body_json(response).await?;
    assert_eq!(value, json!({"status": "healthy"}));
    Ok(())
}
