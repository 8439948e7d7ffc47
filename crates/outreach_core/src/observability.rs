//! Tracing and OpenTelemetry metrics initialization.

#[cfg(feature = "metrics")]
use opentelemetry::{KeyValue, global};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
#[cfg(feature = "metrics")]
use std::sync::OnceLock;
#[cfg(feature = "metrics")]
use std::time::Duration;
use tracing::{debug, info, instrument};
#[cfg(feature = "metrics")]
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "metrics")]
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    #[display("pretty")]
    Pretty,
    /// One JSON object per line
    #[display("json")]
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Initialize the tracing subscriber and, with the `metrics` feature, the
/// OpenTelemetry meter provider.
///
/// The log filter comes from `RUST_LOG`, defaulting to `info`.
///
/// With `metrics`, checks the `OTEL_EXPORTER` environment variable:
/// - "otlp" -> OTLP exporter to OTEL_EXPORTER_OTLP_ENDPOINT (default: http://localhost:4318)
/// - "stdout" or unset -> stdout exporter
///
/// Calling this twice is an error because the global subscriber is already set.
pub fn init_observability(
    service_name: &'static str,
    format: LogFormat,
    export_interval_secs: u64,
) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber_result = match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };
    subscriber_result.map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    info!(
        service_name = service_name,
        log_format = %format,
        "Tracing initialized"
    );

    init_metrics(service_name, export_interval_secs)
}

#[cfg(not(feature = "metrics"))]
fn init_metrics(service_name: &'static str, export_interval_secs: u64) -> Result<(), String> {
    let _ = export_interval_secs;
    debug!(
        service_name = service_name,
        "Metrics feature disabled - skipping metrics initialization"
    );
    Ok(())
}

#[cfg(feature = "metrics")]
#[instrument(skip_all, fields(service_name))]
fn init_metrics(service_name: &'static str, export_interval_secs: u64) -> Result<(), String> {
    info!(
        export_interval_secs = export_interval_secs,
        "Initializing OpenTelemetry metrics"
    );

    let resource = Resource::builder_empty()
        .with_attributes([KeyValue::new("service.name", service_name)])
        .build();

    let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());
    info!(exporter_type = %exporter_type, "Selecting metrics exporter");

    let interval = Duration::from_secs(export_interval_secs);
    let meter_provider = match exporter_type.as_str() {
        "otlp" => {
            let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4318".to_string());
            info!(endpoint = %endpoint, "Using OTLP metrics exporter");

            let exporter = OtlpExporter::builder()
                .with_http()
                .with_endpoint(&endpoint)
                .with_timeout(Duration::from_secs(10))
                .build()
                .map_err(|e| {
                    let msg = format!("Failed to create OTLP exporter: {}", e);
                    warn!(%msg, "OTLP exporter creation failed");
                    msg
                })?;

            let reader = PeriodicReader::builder(exporter)
                .with_interval(interval)
                .build();

            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
        _ => {
            info!("Using stdout metrics exporter");
            let reader = PeriodicReader::builder(StdoutExporter::default())
                .with_interval(interval)
                .build();

            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
    };

    global::set_meter_provider(meter_provider.clone());
    if METER_PROVIDER.set(meter_provider).is_err() {
        warn!("Meter provider was already initialized");
    }
    debug!("Meter provider registered globally");

    Ok(())
}

/// Flush and shut down the metrics provider, if one was installed.
#[instrument]
pub fn shutdown_observability() {
    #[cfg(feature = "metrics")]
    if let Some(provider) = METER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            warn!(error = ?e, "Metrics provider shutdown failed");
        }
    }
    info!("Observability shutdown complete");
}
