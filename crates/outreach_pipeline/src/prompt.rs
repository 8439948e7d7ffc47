//! Prompt construction.
//!
//! The system prompt is assembled from typed fields in one pass, so a value
//! that happens to look like a placeholder (`{tone}`) is inserted literally.

use crate::PipelineSettings;
use outreach_core::{GenerateRequest, GenerationRequest, Message};

/// Fixed user-role message sent after the system prompt.
pub const USER_INSTRUCTION: &str = "Generate the message now.";

/// Example object shown to the model.
const EXAMPLE_MESSAGE: &str = r#"{"subject":"Application for Software Engineer","greeting":"Dear Hiring Manager,","body":"I am writing to express interest...","call_to_action":"I would welcome the opportunity to discuss...","closing":"Best regards,"}"#;

/// Builds the system instruction for one request.
///
/// # Examples
///
/// ```
/// use outreach_core::GenerationRequest;
/// use outreach_pipeline::prompt::system_prompt;
///
/// let request = GenerationRequest::builder()
///     .purpose("a partnership")
///     .recipient_role("CTO")
///     .tone("friendly")
///     .build()
///     .unwrap();
///
/// let prompt = system_prompt(&request);
/// assert!(prompt.starts_with("Generate a professional Cold Email for a partnership to a CTO with friendly tone."));
/// ```
pub fn system_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate a professional {message_type} for {purpose} to a {recipient} with {tone} tone.\n\
         \n\
         Context: {context}\n\
         \n\
         Return ONLY a JSON object with these exact keys:\n\
         - subject\n\
         - greeting\n\
         - body\n\
         - call_to_action\n\
         - closing\n\
         \n\
         Example: {example}",
        message_type = request.message_type(),
        purpose = request.purpose(),
        recipient = request.recipient_role(),
        tone = request.tone(),
        context = request.context(),
        example = EXAMPLE_MESSAGE,
    )
}

/// Builds the provider request: system prompt, fixed user message and the
/// sampling limits from `settings`.
pub fn build_request(request: &GenerationRequest, settings: &PipelineSettings) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![
            Message::system(system_prompt(request)),
            Message::user(USER_INSTRUCTION),
        ])
        .temperature(Some(*settings.temperature()))
        .max_tokens(Some(*settings.max_tokens()))
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::Role;

    fn request(context: &str) -> GenerationRequest {
        GenerationRequest::builder()
            .purpose("job application")
            .recipient_role("Hiring Manager")
            .tone("formal")
            .context(context)
            .build()
            .unwrap()
    }

    #[test]
    fn prompt_mentions_every_field() {
        let prompt = system_prompt(&request("I have 5 years of Rust."));
        assert!(prompt.contains("Cold Email for job application to a Hiring Manager with formal tone."));
        assert!(prompt.contains("Context: I have 5 years of Rust.\n"));
        for key in ["subject", "greeting", "body", "call_to_action", "closing"] {
            assert!(prompt.contains(&format!("- {}", key)));
        }
        assert!(prompt.ends_with(EXAMPLE_MESSAGE));
    }

    #[test]
    fn placeholder_text_in_context_is_not_substituted() {
        let prompt = system_prompt(&request("use {tone} and {purpose} literally"));
        assert!(prompt.contains("Context: use {tone} and {purpose} literally"));
    }

    #[test]
    fn empty_context_still_renders_label() {
        let prompt = system_prompt(&request(""));
        assert!(prompt.contains("Context: \n"));
    }

    #[test]
    fn request_has_system_then_user_with_limits() {
        let built = build_request(&request(""), &PipelineSettings::default());
        let messages = built.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(*messages[0].role(), Role::System);
        assert_eq!(*messages[1].role(), Role::User);
        assert_eq!(messages[1].content(), USER_INSTRUCTION);
        assert_eq!(*built.temperature(), Some(0.7));
        assert_eq!(*built.max_tokens(), Some(500));
    }
}
