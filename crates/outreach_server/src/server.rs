//! Wiring configuration into a running server.

use crate::{OutreachConfig, create_router};
use outreach_error::{OutreachResult, ServerError, ServerErrorKind};
use outreach_models::OpenAICompatibleClient;
use outreach_pipeline::{GenerationPipeline, PipelineSettings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// Builds the shared pipeline from configuration.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built or the settings are invalid.
pub fn build_pipeline(config: &OutreachConfig) -> OutreachResult<GenerationPipeline> {
    let client = OpenAICompatibleClient::new(
        config.api_key().clone(),
        config.model().clone(),
        config.base_url(),
        "openrouter",
        config.request_timeout(),
    )?;

    let settings = PipelineSettings::builder()
        .max_attempts(*config.max_attempts())
        .build()
        .map_err(|e| {
            outreach_error::ConfigError::new(outreach_error::ConfigErrorKind::Builder(
                e.to_string(),
            ))
        })?;

    Ok(GenerationPipeline::new(Arc::new(client), settings))
}

/// Binds the configured address and serves until Ctrl+C.
#[instrument(skip_all, fields(bind_addr = %config.bind_addr()))]
pub async fn serve(config: &OutreachConfig, pipeline: GenerationPipeline) -> OutreachResult<()> {
    let listener = TcpListener::bind(config.bind_addr()).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: config.bind_addr().clone(),
            reason: e.to_string(),
        })
    })?;

    let router = create_router(Arc::new(pipeline));

    info!(addr = %config.bind_addr(), "Outreach server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Outreach server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = ?e, "Failed to listen for Ctrl+C");
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping gracefully...");
}
