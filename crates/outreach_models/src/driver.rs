//! Driver trait implemented by every chat-completion backend.

use async_trait::async_trait;
use outreach_core::{GenerateRequest, GenerateResponse};
use outreach_error::ProviderError;

/// A configured chat-completion backend.
///
/// Implementations hold no per-request state, so one instance is shared
/// across all concurrent requests.
#[async_trait]
pub trait OutreachDriver: Send + Sync {
    /// Send one request and return the first choice.
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ProviderError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier requests are sent with.
    fn model_name(&self) -> &str;
}
