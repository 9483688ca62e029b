//! Chat-completion wire types for the OpenAI-compatible Groq endpoint.
//!
//! Requests are fully typed. Responses are read by path, and anything
//! outside `choices[0].message.content` is ignored.

use serde::{Deserialize, Serialize};

/// Model every generation runs against.
pub const COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

/// Message used when a provider failure carries no message of its own.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to generate content. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Provider response body, kept untyped.
///
/// Providers send `null` or odd types in place of missing fields, and none
/// of that should turn into a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletionResponse {
    body: serde_json::Value,
}

/// Error envelope returned by the provider on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Clone, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

/// A single user-role message with the prompt, no other parameters.
pub fn build_completion_request(prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: COMPLETION_MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    }
}

/// Content of the first choice, verbatim. Empty when there is none.
pub fn extract_text(response: &ChatCompletionResponse) -> String {
    response
        .body
        .pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Pull `error.message` out of a provider error body, if it has one.
pub fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|body| body.error.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
