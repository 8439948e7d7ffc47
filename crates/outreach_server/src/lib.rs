//! HTTP front end for outreach message generation.
//!
//! Exposes `POST /generate` and `GET /health`. Input presence checks happen
//! here; everything else is delegated to the
//! [`GenerationPipeline`](outreach_pipeline::GenerationPipeline).

mod api;
mod config;
mod server;

pub use api::{ApiError, ErrorBody, GenerateForm, create_router};
pub use config::{OutreachConfig, OutreachConfigBuilder};
pub use server::{build_pipeline, serve};
