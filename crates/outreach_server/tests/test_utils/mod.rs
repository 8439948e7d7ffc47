//! Test utilities for server tests.

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, http::header::CONTENT_TYPE};
use outreach_core::{GenerateRequest, GenerateResponse};
use outreach_error::ProviderError;
use outreach_models::OutreachDriver;
use outreach_pipeline::{GenerationPipeline, PipelineSettings};
use outreach_server::create_router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const VALID_JSON: &str = r#"{"subject":"Partnership","greeting":"Hi Sam,","body":"Line one.\nLine two.","call_to_action":"Free on Friday?","closing":"Cheers,"}"#;

/// Driver that always answers with the same text and records prompts.
pub struct FixedDriver {
    reply: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FixedDriver {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn system_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutreachDriver for FixedDriver {
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(system) = req.messages().first() {
            self.prompts.lock().unwrap().push(system.content().clone());
        }
        Ok(GenerateResponse::text(self.reply.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

pub fn app(driver: &Arc<FixedDriver>) -> Router {
    let pipeline = GenerationPipeline::new(driver.clone(), PipelineSettings::default());
    create_router(Arc::new(pipeline))
}

pub fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
