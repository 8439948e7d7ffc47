//! Generation pipeline for outreach messages.
//!
//! One call to [`GenerationPipeline::generate`] builds the prompt, asks the
//! driver for a completion, strips any markdown fence, parses the JSON and
//! validates it against the [`GeneratedMessage`](outreach_core::GeneratedMessage)
//! schema. Any failure along the way consumes one attempt; after the last
//! attempt the caller gets a single `RetriesExhausted` error.

pub mod extraction;
#[cfg(feature = "metrics")]
mod metrics;
mod pipeline;
pub mod prompt;

#[cfg(feature = "metrics")]
pub use metrics::PipelineMetrics;
pub use pipeline::{GenerationPipeline, PipelineSettings, PipelineSettingsBuilder};
