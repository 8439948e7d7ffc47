//! Core data types for the Outreach service.
//!
//! This crate provides the domain records exchanged between the HTTP layer
//! and the generation pipeline, the provider-neutral chat request/response
//! types, and logging/metrics initialisation.

mod message;
mod observability;
mod outreach;
mod request;
mod role;

pub use message::{Message, MessageBuilder};
pub use observability::{LogFormat, init_observability, shutdown_observability};
pub use outreach::{
    GeneratedMessage, GeneratedMessageBuilder, GenerationRequest, GenerationRequestBuilder,
    MessageType,
};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder, TokenUsage,
};
pub use role::Role;
