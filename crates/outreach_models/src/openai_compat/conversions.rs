//! Type conversions between Outreach and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use outreach_core::{GenerateRequest, GenerateResponse, TokenUsage};
use outreach_error::{ProviderError, ProviderErrorKind};

/// Converts a GenerateRequest to OpenAI chat format.
pub fn to_chat_request(req: &GenerateRequest, model: &str) -> Result<ChatRequest, ProviderError> {
    let messages = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().clone(),
        })
        .collect::<Vec<_>>();

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Converts an OpenAI chat response to a GenerateResponse.
///
/// Only the first choice is kept. No choices at all is not an error here;
/// the caller sees an empty `content`.
pub fn from_chat_response(response: &ChatResponse) -> GenerateResponse {
    let first = response.choices.first();

    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsage::new(
                input as u64,
                output as u64,
                total as u64,
            )),
            _ => None,
        }
    });

    GenerateResponse::builder()
        .content(first.and_then(|choice| choice.message.content.clone()))
        .finish_reason(first.and_then(|choice| choice.finish_reason.clone()))
        .usage(usage)
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::Message;

    #[test]
    fn request_keeps_message_order_and_sampling() {
        let req = GenerateRequest::builder()
            .messages(vec![Message::system("rules"), Message::user("go")])
            .max_tokens(Some(500u32))
            .temperature(Some(0.7f32))
            .build()
            .unwrap();

        let chat = to_chat_request(&req, "some/model").unwrap();
        assert_eq!(chat.model(), "some/model");
        assert_eq!(chat.messages()[0].role, "system");
        assert_eq!(chat.messages()[1].role, "user");
        assert_eq!(chat.messages()[1].content, "go");
        assert_eq!(*chat.max_tokens(), Some(500));

        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["max_tokens"], 500);
        assert!(json.get("stream").is_none());
    }

    #[test]
    fn response_without_choices_has_no_content() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let converted = from_chat_response(&response);
        assert!(converted.content().is_none());
    }

    #[test]
    fn null_content_is_tolerated() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]}"#,
        )
        .unwrap();
        let converted = from_chat_response(&response);
        assert!(converted.content().is_none());
        assert_eq!(converted.finish_reason().as_deref(), Some("length"));
    }
}
