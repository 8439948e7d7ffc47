//! Generic OpenAI-compatible API client.
//!
//! Any API that follows the OpenAI chat completions format works here,
//! including OpenRouter, Groq and local servers.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAICompatibleClient};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, ChatUsage};
