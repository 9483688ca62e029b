use axum::http::Method;
use socialgen_core::generate::{
    build_completion_request, build_prompt, extract_text, is_credential_configured,
    validate_payload, RawGenerationPayload,
};

use crate::error::Error;
use crate::groq::CompletionBackend;

/// Validates generation requests and forwards them to the completion backend.
///
/// Holds no per-request state, so one instance is shared by every handler.
#[derive(Debug)]
pub struct Gateway<B> {
    api_key: Option<String>,
    backend: B,
}

impl<B: CompletionBackend> Gateway<B> {
    pub fn new(api_key: Option<String>, backend: B) -> Self {
        Self { api_key, backend }
    }

    pub fn has_credential(&self) -> bool {
        is_credential_configured(self.api_key.as_deref())
    }

    /// Entry point for the HTTP endpoint.
    ///
    /// The method is checked before the credential, and the credential
    /// before the body is even parsed.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Result<String, Error> {
        if *method != Method::POST {
            return Err(Error::MethodNotAllowed);
        }
        let api_key = self.credential()?;
        let raw = parse_body(body)?;

        self.complete(api_key, &raw).await
    }

    /// Entry point for callers that already hold a payload.
    pub async fn generate(&self, raw: &RawGenerationPayload) -> Result<String, Error> {
        let api_key = self.credential()?;

        self.complete(api_key, raw).await
    }

    fn credential(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| is_credential_configured(Some(*key)))
            .ok_or(Error::MissingCredential)
    }

    async fn complete(&self, api_key: &str, raw: &RawGenerationPayload) -> Result<String, Error> {
        let request = validate_payload(raw)?;
        let prompt = build_prompt(&request);

        log::debug!(
            "Built {} prompt for {:?} ({} chars)",
            request.content.content_type(),
            request.business_name,
            prompt.len()
        );

        let response = self
            .backend
            .complete(api_key, &build_completion_request(&prompt))
            .await?;

        Ok(extract_text(&response))
    }
}

/// An empty body is an empty form, not a malformed one.
fn parse_body(body: &[u8]) -> Result<RawGenerationPayload, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawGenerationPayload::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| Error::InvalidRequest(format!("Invalid request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialgen_core::generate::{ChatCompletionRequest, ChatCompletionResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeBackend {
        calls: AtomicUsize,
        last_request: Mutex<Option<ChatCompletionRequest>>,
        last_api_key: Mutex<Option<String>>,
        reply: Result<serde_json::Value, Error>,
    }

    impl FakeBackend {
        fn replying(content: &str) -> Self {
            Self::with_reply(Ok(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            })))
        }

        fn with_reply(reply: Result<serde_json::Value, Error>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                last_api_key: Mutex::new(None),
                reply,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> String {
            let request = self.last_request.lock().unwrap();
            request.as_ref().unwrap().messages[0].content.clone()
        }
    }

    impl CompletionBackend for FakeBackend {
        async fn complete(
            &self,
            api_key: &str,
            request: &ChatCompletionRequest,
        ) -> Result<ChatCompletionResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_api_key.lock().unwrap() = Some(api_key.to_string());
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.reply
                .clone()
                .map(|value| serde_json::from_value(value).unwrap())
        }
    }

    fn gateway(api_key: Option<&str>, backend: FakeBackend) -> Gateway<FakeBackend> {
        Gateway::new(api_key.map(str::to_string), backend)
    }

    const REEL_BODY: &[u8] = br#"{
        "businessName": "Kopi Kita",
        "niche": "Coffee shop",
        "tone": "Playful",
        "contentType": "Reel Script",
        "language": ""
    }"#;

    #[tokio::test]
    async fn test_reel_script_returns_completion_text() {
        let gateway = gateway(Some("gsk_test"), FakeBackend::replying("**Hook:** Wake up!"));

        let text = gateway.handle(&Method::POST, REEL_BODY).await.unwrap();

        assert_eq!(text, "**Hook:** Wake up!");
        assert_eq!(gateway.backend.calls(), 1);
        let prompt = gateway.backend.last_prompt();
        assert!(prompt.contains("Reel script for Kopi Kita (Industry: Coffee shop)"));
        assert!(prompt.ends_with("Answer fully in English."));
    }

    #[tokio::test]
    async fn test_wrong_method_is_checked_first() {
        let gateway = gateway(None, FakeBackend::replying("unused"));

        let err = gateway.handle(&Method::GET, b"").await.unwrap_err();

        assert_eq!(err, Error::MethodNotAllowed);
        assert_eq!(gateway.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_wins_over_bad_payload() {
        for key in [None, Some(""), Some("your_api_key_here")] {
            let gateway = gateway(key, FakeBackend::replying("unused"));

            let err = gateway.handle(&Method::POST, b"not json").await.unwrap_err();
            assert_eq!(err, Error::MissingCredential);

            let err = gateway.handle(&Method::POST, REEL_BODY).await.unwrap_err();
            assert_eq!(err, Error::MissingCredential);

            assert_eq!(gateway.backend.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_credential_is_trimmed_before_use() {
        let gateway = gateway(Some("  gsk_test\n"), FakeBackend::replying("ok"));

        gateway.handle(&Method::POST, REEL_BODY).await.unwrap();

        assert_eq!(
            gateway.backend.last_api_key.lock().unwrap().as_deref(),
            Some("gsk_test")
        );
    }

    #[tokio::test]
    async fn test_padded_placeholder_is_missing_credential() {
        let gateway = gateway(Some(" your_api_key_here "), FakeBackend::replying("unused"));

        let err = gateway.handle(&Method::POST, REEL_BODY).await.unwrap_err();

        assert_eq!(err, Error::MissingCredential);
        assert_eq!(gateway.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_request() {
        let gateway = gateway(Some("gsk_test"), FakeBackend::replying("unused"));

        let err = gateway
            .handle(&Method::POST, br#"{"businessName": 42}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidRequest(ref msg) if msg.starts_with("Invalid request body")));
        assert_eq!(gateway.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_body_means_missing_fields() {
        let gateway = gateway(Some("gsk_test"), FakeBackend::replying("unused"));

        let err = gateway.handle(&Method::POST, b"").await.unwrap_err();

        assert_eq!(
            err,
            Error::InvalidRequest("Missing required fields.".to_string())
        );
        assert_eq!(gateway.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_content_type_makes_no_call() {
        let gateway = gateway(Some("gsk_test"), FakeBackend::replying("unused"));
        let body = br#"{"businessName":"A","niche":"B","tone":"C","contentType":"Blog Post"}"#;

        let err = gateway.handle(&Method::POST, body).await.unwrap_err();

        assert_eq!(err, Error::InvalidRequest("Invalid content type.".to_string()));
        assert_eq!(gateway.backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_text() {
        let backend = FakeBackend::with_reply(Ok(serde_json::json!({ "choices": [] })));
        let gateway = gateway(Some("gsk_test"), backend);

        let text = gateway.handle(&Method::POST, REEL_BODY).await.unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_backend_failure_is_passed_through() {
        let backend = FakeBackend::with_reply(Err(Error::upstream("Rate limit reached")));
        let gateway = gateway(Some("gsk_test"), backend);

        let err = gateway.handle(&Method::POST, REEL_BODY).await.unwrap_err();

        assert_eq!(err, Error::UpstreamFailure("Rate limit reached".to_string()));
        assert_eq!(gateway.backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_from_payload() {
        let gateway = gateway(Some("gsk_test"), FakeBackend::replying("| Day | ... |"));
        let raw = RawGenerationPayload {
            business_name: Some("Kopi Kita".to_string()),
            niche: Some("Coffee shop".to_string()),
            tone: Some("Playful".to_string()),
            content_type: Some("30-Day Content Calendar".to_string()),
            graphics_count: Some(serde_json::json!(5)),
            reels_count: Some(serde_json::json!("3")),
            motion_count: Some(serde_json::json!(2)),
            live_count: Some(serde_json::json!(1)),
            ..Default::default()
        };

        let text = gateway.generate(&raw).await.unwrap();

        assert_eq!(text, "| Day | ... |");
        assert!(gateway
            .backend
            .last_prompt()
            .contains("5 Graphics, 3 Reels, 2 Motion Videos, and 1 Live Sessions."));
    }
}
