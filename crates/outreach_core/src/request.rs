//! Request and response types for LLM generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Ordered conversation messages
    messages: Vec<Message>,
    /// Cap on generated tokens
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct TokenUsage {
    /// Tokens in the prompt
    input_tokens: u64,
    /// Tokens in the completion
    output_tokens: u64,
    /// Total tokens
    total_tokens: u64,
}

impl TokenUsage {
    /// Creates a usage record.
    pub fn new(input_tokens: u64, output_tokens: u64, total_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// Text returned by the provider for the first choice.
///
/// `content` is `None` when the provider answered without any text.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// Message content of the first choice
    #[builder(default)]
    content: Option<String>,
    /// Why generation stopped, if reported
    #[builder(default)]
    finish_reason: Option<String>,
    /// Token usage, if reported
    #[builder(default)]
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Response carrying only text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
