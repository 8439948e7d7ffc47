//! Outreach Server - drafts structured outreach messages with an LLM.
//!
//! Serves `POST /generate` and `GET /health`. Provider settings come from the
//! environment (a `.env` file is honoured); see `OutreachConfig::from_env`.

use clap::Parser;
use outreach_core::{LogFormat, init_observability, shutdown_observability};
use outreach_server::{OutreachConfig, build_pipeline, serve};
use tracing::info;

/// Command-line arguments for the outreach server.
#[derive(Parser, Debug)]
#[command(name = "outreach-server")]
#[command(about = "Outreach Server - LLM-backed outreach message drafting")]
#[command(version)]
struct Args {
    /// Listen address, overriding OUTREACH_BIND_ADDR
    #[arg(short, long)]
    bind: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, env = "OUTREACH_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    /// Metrics export interval in seconds (only with the `metrics` feature)
    #[arg(long, default_value_t = 60)]
    metrics_interval: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_observability("outreach-server", args.log_format, args.metrics_interval)?;

    info!("Starting Outreach server");

    let mut config = OutreachConfig::from_env()?;
    if let Some(bind) = args.bind {
        config = config.with_bind_addr(bind);
    }
    info!(
        model = %config.model(),
        base_url = %config.base_url(),
        max_attempts = config.max_attempts(),
        timeout_secs = config.request_timeout_secs(),
        "Configuration loaded"
    );

    let pipeline = build_pipeline(&config)?;
    let result = serve(&config, pipeline).await;

    shutdown_observability();
    result?;
    Ok(())
}
