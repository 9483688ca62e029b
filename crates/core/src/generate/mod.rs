pub mod completion;
pub mod prompt;
pub mod types;
pub mod validate;

pub use completion::{
    build_completion_request, extract_text, provider_error_message, ChatCompletionRequest,
    ChatCompletionResponse, COMPLETION_MODEL, UPSTREAM_FALLBACK_MESSAGE,
};
pub use prompt::{build_prompt, content_mix_rule};
pub use types::{
    ContentMix, ContentRequest, ContentType, GenerationRequest, RawGenerationPayload,
};
pub use validate::{
    is_credential_configured, validate_payload, ValidationError, PLACEHOLDER_API_KEY,
};
