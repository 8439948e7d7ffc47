//! OpenTelemetry instruments for the generation pipeline.
//!
//! Available with the `metrics` feature.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use tracing::debug;

/// Counters and timings for generation attempts.
#[derive(Clone)]
pub struct PipelineMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Attempts started
    pub attempts: Counter<u64>,
    /// Attempts that failed, labelled by reason
    pub attempt_failures: Counter<u64>,
    /// Finished generations, labelled by outcome
    pub generations: Counter<u64>,
    /// Wall time of a whole generation in seconds
    pub duration: Histogram<f64>,
}

impl PipelineMetrics {
    /// Create pipeline metrics on the global meter provider.
    pub fn new() -> Self {
        let meter = global::meter("outreach_pipeline");

        let attempts = meter
            .u64_counter("outreach.attempts")
            .with_description("Generation attempts started")
            .build();

        let attempt_failures = meter
            .u64_counter("outreach.attempt_failures")
            .with_description("Generation attempts that failed")
            .build();

        let generations = meter
            .u64_counter("outreach.generations")
            .with_description("Completed generations by outcome")
            .build();

        let duration = meter
            .f64_histogram("outreach.duration")
            .with_unit("seconds")
            .with_description("Generation duration including retries")
            .build();

        debug!("PipelineMetrics instruments created");
        Self {
            _meter: meter,
            attempts,
            attempt_failures,
            generations,
            duration,
        }
    }

    /// Record the start of an attempt.
    pub fn record_attempt(&self) {
        self.attempts.add(1, &[]);
    }

    /// Record a failed attempt.
    pub fn record_failure(&self, reason: &'static str) {
        self.attempt_failures
            .add(1, &[KeyValue::new("reason", reason)]);
    }

    /// Record how a generation ended.
    pub fn record_outcome(&self, outcome: &'static str, duration_secs: f64) {
        let labels = &[KeyValue::new("outcome", outcome)];
        self.generations.add(1, labels);
        self.duration.record(duration_secs, labels);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}
