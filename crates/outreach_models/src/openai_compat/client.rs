//! Generic client for OpenAI-compatible APIs.

use crate::OutreachDriver;
use crate::openai_compat::{ChatResponse, conversions};
use async_trait::async_trait;
use outreach_core::{GenerateRequest, GenerateResponse};
use outreach_error::{ProviderError, ProviderErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// OpenRouter's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Free-tier model used when none is configured.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";

/// Generic client for any OpenAI-compatible API.
///
/// Requests go to `{base_url}/chat/completions` with a bearer token. Every
/// request is bounded by the timeout given at construction.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider_name: &'static str,
}

impl std::fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("provider_name", &self.provider_name)
            .finish_non_exhaustive()
    }
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier
    /// * `base_url` - API root; `/chat/completions` is appended
    /// * `provider_name` - Name of the provider (for logging/tracing)
    /// * `timeout` - Upper bound on each HTTP round trip
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(api_key), fields(provider = provider_name, model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        base_url: &str,
        provider_name: &'static str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ProviderError::new(ProviderErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        debug!(
            provider = provider_name,
            model = %model,
            url = %endpoint,
            timeout_secs = timeout.as_secs_f64(),
            "Created OpenAI-compatible client"
        );

        Ok(Self {
            client,
            api_key,
            model,
            endpoint,
            provider_name,
        })
    }

    /// Returns the full chat-completions URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OutreachDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                let kind = if e.is_timeout() {
                    ProviderErrorKind::Timeout(e.to_string())
                } else {
                    ProviderErrorKind::Http(format!("Request failed: {}", e))
                };
                ProviderError::new(kind)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(&chat_response))
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
