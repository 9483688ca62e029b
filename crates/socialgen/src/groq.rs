use std::future::Future;

use socialgen_core::generate::{
    provider_error_message, ChatCompletionRequest, ChatCompletionResponse,
};

use crate::error::Error;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Something that can turn a chat-completion request into a response.
///
/// One call per generation, never retried.
pub trait CompletionBackend: Send + Sync {
    fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> impl Future<Output = Result<ChatCompletionResponse, Error>> + Send;
}

/// Groq's OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
}

impl GroqClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl CompletionBackend for GroqClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(provider_error_message(&body).unwrap_or_else(
                || format!("Groq API returned status: {status}"),
            )));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| Error::upstream(format!("Failed to parse Groq response: {e}")))
    }
}
