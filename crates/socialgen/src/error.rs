use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use socialgen_core::generate::{ValidationError, UPSTREAM_FALLBACK_MESSAGE};

/// Why a generation request failed. Every variant ends the request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    #[error(
        "Missing Groq API Key. Please configure GROQ_API_KEY in your .env file or environment."
    )]
    MissingCredential,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    UpstreamFailure(String),
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    /// Upstream failure carrying `message`, or the generic fallback when it is blank.
    pub fn upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::UpstreamFailure(UPSTREAM_FALLBACK_MESSAGE.to_string())
        } else {
            Self::UpstreamFailure(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
