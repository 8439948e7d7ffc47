//! HTTP API for message generation and health checks.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use outreach_core::{GeneratedMessage, GenerationRequest, MessageType};
use outreach_error::GenerationError;
use outreach_pipeline::GenerationPipeline;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// API server state.
#[derive(Clone)]
struct ApiState {
    pipeline: Arc<GenerationPipeline>,
}

/// Creates the API router.
pub fn create_router(pipeline: Arc<GenerationPipeline>) -> Router {
    let state = ApiState { pipeline };

    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .with_state(state)
}

/// Body of `POST /generate`.
///
/// Every field is optional at the wire level so that absence can be reported
/// as a missing field rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateForm {
    /// What the message is for
    #[serde(default)]
    pub purpose: Option<String>,
    /// Who receives it
    #[serde(default)]
    pub recipient_role: Option<String>,
    /// Desired tone
    #[serde(default)]
    pub tone: Option<String>,
    /// Optional background
    #[serde(default)]
    pub context: Option<String>,
}

impl GenerateForm {
    /// Checks required fields and builds the pipeline input.
    ///
    /// Absent and empty values are both treated as missing. A missing
    /// context becomes the empty string.
    pub fn into_request(self) -> Result<GenerationRequest, ApiError> {
        let (Some(purpose), Some(recipient_role), Some(tone)) = (
            non_empty(self.purpose),
            non_empty(self.recipient_role),
            non_empty(self.tone),
        ) else {
            return Err(ApiError::MissingFields);
        };

        GenerationRequest::builder()
            .message_type(MessageType::ColdEmail)
            .purpose(purpose)
            .recipient_role(recipient_role)
            .tone(tone)
            .context(self.context.unwrap_or_default())
            .build()
            .map_err(|_| ApiError::MissingFields)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
    /// Machine-readable category
    pub kind: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// purpose, recipientRole or tone absent or empty
    MissingFields,
    /// The body was not a JSON object of the expected shape
    InvalidBody(String),
    /// The pipeline gave up
    Generation(GenerationError),
}

impl ApiError {
    /// Tag distinguishing client defects from upstream defects.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingFields => "missing_fields",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Generation(_) => "generation_failed",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingFields => write!(f, "Missing required fields"),
            ApiError::InvalidBody(reason) => write!(f, "{}", reason),
            // The kind alone; file/line stay in the logs.
            ApiError::Generation(err) => write!(f, "{}", err.kind),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        ApiError::Generation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate one outreach message.
#[instrument(skip_all)]
async fn generate(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateForm>, JsonRejection>,
) -> Result<Json<GeneratedMessage>, ApiError> {
    let Json(form) = payload.inspect_err(|e| warn!(error = %e, "Rejected request body"))?;

    let request = form.into_request().inspect_err(|_| {
        warn!("Request missing required fields");
    })?;

    let message = state.pipeline.generate(&request).await.map_err(|e| {
        error!(error = %e, "Error generating message");
        ApiError::from(e)
    })?;

    Ok(Json(message))
}
