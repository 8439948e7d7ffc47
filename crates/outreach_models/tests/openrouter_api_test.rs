//! Live test against OpenRouter.
//!
//! Requires OPENROUTER_API_KEY in the environment or a `.env` file.
//!
//! Run with: cargo test --package outreach_models --features api

#![cfg(feature = "api")]

use outreach_core::{GenerateRequest, Message};
use outreach_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAICompatibleClient, OutreachDriver};
use std::time::Duration;

#[tokio::test]
async fn test_openrouter_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("OPENROUTER_API_KEY")?;

    let client = OpenAICompatibleClient::new(
        api_key,
        DEFAULT_MODEL.to_string(),
        DEFAULT_BASE_URL,
        "openrouter",
        Duration::from_secs(60),
    )?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Say hello")])
        .max_tokens(Some(20u32))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(response.content().is_some());
    Ok(())
}
