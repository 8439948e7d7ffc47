//! LLM provider integration for the Outreach service.
//!
//! [`OutreachDriver`] is the seam the generation pipeline calls through;
//! [`OpenAICompatibleClient`] implements it for any OpenAI-style
//! chat-completions endpoint (OpenRouter by default).

mod driver;
pub mod openai_compat;

pub use driver::OutreachDriver;
pub use openai_compat::{
    ChatMessage, ChatRequest, ChatResponse, DEFAULT_BASE_URL, DEFAULT_MODEL,
    OpenAICompatibleClient,
};
