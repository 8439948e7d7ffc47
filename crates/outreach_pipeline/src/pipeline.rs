//! Bounded-retry generation loop.

use crate::{extraction, prompt};
use derive_getters::Getters;
use outreach_core::{GeneratedMessage, GenerationRequest};
use outreach_error::{GenerationError, GenerationErrorKind, GenerationResult};
use outreach_models::OutreachDriver;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[cfg(feature = "metrics")]
use crate::PipelineMetrics;

/// Sampling limits and retry budget.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PipelineSettings {
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
    /// Cap on generated tokens
    #[builder(default = "500")]
    max_tokens: u32,
    /// Total attempts, including the first
    #[builder(default = "3")]
    max_attempts: usize,
}

impl PipelineSettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == Some(0) {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl PipelineSettings {
    /// Returns a builder for constructing PipelineSettings.
    pub fn builder() -> PipelineSettingsBuilder {
        PipelineSettingsBuilder::default()
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
            max_attempts: 3,
        }
    }
}

/// Turns a [`GenerationRequest`] into a validated [`GeneratedMessage`].
///
/// The driver is shared; the pipeline itself keeps no per-request state, so
/// one instance serves all concurrent requests.
pub struct GenerationPipeline {
    driver: Arc<dyn OutreachDriver>,
    settings: PipelineSettings,
    #[cfg(feature = "metrics")]
    metrics: PipelineMetrics,
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl GenerationPipeline {
    /// Creates a pipeline over `driver`.
    pub fn new(driver: Arc<dyn OutreachDriver>, settings: PipelineSettings) -> Self {
        Self {
            driver,
            settings,
            #[cfg(feature = "metrics")]
            metrics: PipelineMetrics::new(),
        }
    }

    /// The active settings.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Runs attempts until one yields a valid message or the budget is spent.
    ///
    /// # Errors
    ///
    /// Only `RetriesExhausted`. Per-attempt failures are logged and retried.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.driver.provider_name(),
            model = %self.driver.model_name(),
            max_attempts = self.settings.max_attempts
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult<GeneratedMessage> {
        #[cfg(feature = "metrics")]
        let started = std::time::Instant::now();

        let max_attempts = self.settings.max_attempts;
        let mut last_response: Option<String> = None;

        for attempt in 1..=max_attempts {
            #[cfg(feature = "metrics")]
            self.metrics.record_attempt();

            match self.attempt(request, &mut last_response).await {
                Ok(message) => {
                    info!(attempt, "Generated valid message");
                    #[cfg(feature = "metrics")]
                    self.metrics
                        .record_outcome("success", started.elapsed().as_secs_f64());
                    return Ok(message);
                }
                Err(err) => {
                    warn!(
                        attempt,
                        reason = err.kind.label(),
                        error = %err.kind,
                        "Attempt failed"
                    );
                    #[cfg(feature = "metrics")]
                    self.metrics.record_failure(err.kind.label());
                }
            }
        }

        let last_response = last_response
            .as_deref()
            .map(extraction::excerpt)
            .unwrap_or_default();
        error!(
            attempts = max_attempts,
            last_response = %last_response,
            "All generation attempts failed"
        );
        #[cfg(feature = "metrics")]
        self.metrics
            .record_outcome("exhausted", started.elapsed().as_secs_f64());

        Err(GenerationError::new(GenerationErrorKind::RetriesExhausted {
            attempts: max_attempts,
            last_response,
        }))
    }

    /// One prompt, call, parse and validate cycle.
    ///
    /// `last_response` is updated as soon as non-empty text arrives, before
    /// parsing, so a later exhaustion error can quote it.
    async fn attempt(
        &self,
        request: &GenerationRequest,
        last_response: &mut Option<String>,
    ) -> GenerationResult<GeneratedMessage> {
        let chat = prompt::build_request(request, &self.settings);
        if let Some(system) = chat.messages().first() {
            debug!(system_prompt = %system.content(), "Sending prompt");
        }

        let response = self.driver.generate(&chat).await?;

        let raw = response
            .content()
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

        debug!(response = %raw, "Model response");
        *last_response = Some(raw.to_string());

        extraction::parse_message(raw)
    }
}
