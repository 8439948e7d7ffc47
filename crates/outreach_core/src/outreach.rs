//! Outreach domain records: what the caller asks for and what comes back.

use serde::{Deserialize, Serialize};

/// Category of message to draft.
///
/// Only cold emails are produced today; the handler always supplies the
/// default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum MessageType {
    #[default]
    #[display("Cold Email")]
    #[serde(rename = "Cold Email")]
    ColdEmail,
}

/// Parameters for one generation.
///
/// Purpose, recipient role and tone are never empty; context may be.
///
/// # Examples
///
/// ```
/// use outreach_core::{GenerationRequest, MessageType};
///
/// let request = GenerationRequest::builder()
///     .purpose("job application")
///     .recipient_role("Hiring Manager")
///     .tone("formal")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.message_type(), MessageType::ColdEmail);
/// assert_eq!(request.context(), "");
///
/// let missing_tone = GenerationRequest::builder()
///     .purpose("job application")
///     .recipient_role("Hiring Manager")
///     .tone("")
///     .build();
/// assert!(missing_tone.is_err());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Kind of message
    #[builder(default)]
    message_type: MessageType,
    /// What the message is for
    purpose: String,
    /// Who receives it
    recipient_role: String,
    /// Desired tone
    tone: String,
    /// Free-text background, possibly empty
    #[builder(default)]
    context: String,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        let required = [
            ("purpose", &self.purpose),
            ("recipient_role", &self.recipient_role),
            ("tone", &self.tone),
        ];
        for (name, value) in required {
            if matches!(value, Some(v) if v.is_empty()) {
                return Err(format!("{} must not be empty", name));
            }
        }
        Ok(())
    }
}

/// A validated outreach message.
///
/// Deserialisation is strict: all five fields must be JSON strings and no
/// other keys may be present.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(deny_unknown_fields)]
#[builder(setter(into))]
pub struct GeneratedMessage {
    /// Subject line
    subject: String,
    /// Salutation
    greeting: String,
    /// Main text, may contain newlines
    body: String,
    /// What the recipient is asked to do
    call_to_action: String,
    /// Sign-off
    closing: String,
}

impl GeneratedMessage {
    /// Returns a builder for constructing a GeneratedMessage.
    pub fn builder() -> GeneratedMessageBuilder {
        GeneratedMessageBuilder::default()
    }
}
