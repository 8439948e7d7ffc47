//! Service configuration read from the environment.

use derive_getters::Getters;
use outreach_error::{ConfigError, ConfigErrorKind};
use outreach_models::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration for the outreach server.
#[derive(Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OutreachConfig {
    /// Bearer token for the LLM provider
    api_key: String,
    /// OpenAI-compatible API root
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Listen address
    #[builder(default = "\"127.0.0.1:3000\".to_string()")]
    bind_addr: String,
    /// Per-attempt HTTP timeout in seconds
    #[builder(default = "30")]
    request_timeout_secs: u64,
    /// Total generation attempts per request
    #[builder(default = "3")]
    max_attempts: usize,
}

impl std::fmt::Debug for OutreachConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutreachConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl OutreachConfig {
    /// Returns a builder for constructing OutreachConfig.
    pub fn builder() -> OutreachConfigBuilder {
        OutreachConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENROUTER_API_KEY` (required)
    /// - `OUTREACH_BASE_URL` (default: "https://openrouter.ai/api/v1")
    /// - `OUTREACH_MODEL` (default: "meta-llama/llama-3.2-3b-instruct:free")
    /// - `OUTREACH_BIND_ADDR` (default: "127.0.0.1:3000")
    /// - `OUTREACH_REQUEST_TIMEOUT_SECS` (default: 30)
    /// - `OUTREACH_MAX_ATTEMPTS` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENROUTER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::MissingVariable(
                    "OPENROUTER_API_KEY".to_string(),
                ))
            })?;

        let mut builder = OutreachConfigBuilder::default();
        builder.api_key(api_key);

        if let Some(base_url) = lookup("OUTREACH_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Some(model) = lookup("OUTREACH_MODEL") {
            builder.model(model);
        }
        if let Some(bind_addr) = lookup("OUTREACH_BIND_ADDR") {
            builder.bind_addr(bind_addr);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "OUTREACH_REQUEST_TIMEOUT_SECS")? {
            if secs == 0 {
                return Err(invalid("OUTREACH_REQUEST_TIMEOUT_SECS", "0", "must be positive"));
            }
            builder.request_timeout_secs(secs);
        }
        if let Some(attempts) = parse_var::<usize>(&lookup, "OUTREACH_MAX_ATTEMPTS")? {
            if attempts == 0 {
                return Err(invalid("OUTREACH_MAX_ATTEMPTS", "0", "must be at least 1"));
            }
            builder.max_attempts(attempts);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Builder(e.to_string())))
    }

    /// Replaces the listen address.
    pub fn with_bind_addr(self, bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            ..self
        }
    }

    /// Per-attempt HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[track_caller]
fn invalid(variable: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::new(ConfigErrorKind::InvalidValue {
        variable: variable.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    })
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(variable) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(variable, &raw, e.to_string())),
    }
}
