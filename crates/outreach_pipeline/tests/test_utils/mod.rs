//! Test utilities for pipeline tests.
//!
//! This module provides a scripted driver and request helpers.

use async_trait::async_trait;
use outreach_core::{GenerateRequest, GenerateResponse, GenerationRequest};
use outreach_error::{ProviderError, ProviderErrorKind};
use outreach_models::OutreachDriver;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A well-formed model answer.
pub const VALID_JSON: &str = r#"{"subject":"Application for Rust Engineer","greeting":"Dear Hiring Manager,","body":"I am writing to express interest.\nI have shipped Rust services.","call_to_action":"Could we talk next week?","closing":"Best regards,"}"#;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text as the first choice's content.
    Text(String),
    /// Return a response with no content at all.
    Empty,
    /// Fail at the transport level.
    Transport,
}

/// Driver that replays a script and counts calls.
///
/// Once the script runs out the last reply repeats.
pub struct ScriptedDriver {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    pub fn new(replies: Vec<MockReply>) -> Self {
        let fallback = replies.last().cloned().unwrap_or(MockReply::Empty);
        Self {
            replies: Mutex::new(replies.into()),
            fallback,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: MockReply) -> Self {
        Self::new(vec![reply])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutreachDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Text(text) => Ok(GenerateResponse::text(text)),
            MockReply::Empty => Ok(GenerateResponse::default()),
            MockReply::Transport => Err(ProviderError::new(ProviderErrorKind::Http(
                "connection reset".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

pub fn text(s: &str) -> MockReply {
    MockReply::Text(s.to_string())
}

pub fn sample_request() -> GenerationRequest {
    GenerationRequest::builder()
        .purpose("job application")
        .recipient_role("Hiring Manager")
        .tone("formal")
        .context("Five years of Rust")
        .build()
        .expect("Failed to build test request")
}
