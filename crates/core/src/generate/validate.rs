use serde_json::Value;

use super::types::{
    ContentMix, ContentRequest, ContentType, GenerationRequest, RawGenerationPayload,
    DEFAULT_LANGUAGE, DEFAULT_TARGET_AUDIENCE,
};

/// Value shipped in the sample `.env`; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields.")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid content type.")]
    InvalidContentType(String),

    #[error("Invalid {field}: expected a whole number of 0 or more, got {value}")]
    InvalidCount { field: &'static str, value: String },
}

/// Returns true when the credential is usable for an outbound call.
pub fn is_credential_configured(api_key: Option<&str>) -> bool {
    match api_key.map(str::trim) {
        None | Some("") | Some(PLACEHOLDER_API_KEY) => false,
        Some(_) => true,
    }
}

/// Turn a raw payload into a [`GenerationRequest`].
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. `businessName`, `niche`, `tone` and `contentType` are all present
/// 2. `contentType` is one of the known labels
/// 3. every content-mix count is a non-negative whole number
///
/// Blank strings count as missing. Optional fields fall back to their
/// defaults.
pub fn validate_payload(raw: &RawGenerationPayload) -> Result<GenerationRequest, ValidationError> {
    let business_name = non_empty(&raw.business_name);
    let niche = non_empty(&raw.niche);
    let tone = non_empty(&raw.tone);
    let content_type = non_empty(&raw.content_type);

    let (Some(business_name), Some(niche), Some(tone), Some(content_type)) =
        (business_name, niche, tone, content_type)
    else {
        return Err(ValidationError::MissingFields(missing_fields(raw)));
    };

    let content_type = ContentType::from_label(content_type)
        .ok_or_else(|| ValidationError::InvalidContentType(content_type.to_string()))?;

    let content = match content_type {
        ContentType::ContentCalendar => ContentRequest::ContentCalendar {
            mix: parse_content_mix(raw)?,
        },
        ContentType::ReelScript => ContentRequest::ReelScript,
    };

    Ok(GenerationRequest {
        business_name: business_name.to_string(),
        niche: niche.to_string(),
        target_audience: non_empty(&raw.target_audience)
            .unwrap_or(DEFAULT_TARGET_AUDIENCE)
            .to_string(),
        tone: tone.to_string(),
        language: non_empty(&raw.language)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string(),
        content,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn missing_fields(raw: &RawGenerationPayload) -> Vec<&'static str> {
    [
        ("businessName", &raw.business_name),
        ("niche", &raw.niche),
        ("tone", &raw.tone),
        ("contentType", &raw.content_type),
    ]
    .into_iter()
    .filter(|(_, value)| non_empty(value).is_none())
    .map(|(name, _)| name)
    .collect()
}

fn parse_content_mix(raw: &RawGenerationPayload) -> Result<ContentMix, ValidationError> {
    Ok(ContentMix {
        graphics: parse_count("graphicsCount", raw.graphics_count.as_ref())?,
        reels: parse_count("reelsCount", raw.reels_count.as_ref())?,
        motion: parse_count("motionCount", raw.motion_count.as_ref())?,
        live: parse_count("liveCount", raw.live_count.as_ref())?,
    })
}

/// Absent, `null` and `""` all mean zero.
pub fn parse_count(field: &'static str, value: Option<&Value>) -> Result<u64, ValidationError> {
    let invalid = |value: &Value| ValidationError::InvalidCount {
        field,
        value: value.to_string(),
    };

    match value {
        None | Some(Value::Null) => Ok(0),
        Some(number @ Value::Number(n)) => n.as_u64().ok_or_else(|| invalid(number)),
        Some(text @ Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse::<u64>().map_err(|_| invalid(text))
        }
        Some(other) => Err(invalid(other)),
    }
}
