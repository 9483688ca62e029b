use serde::{Deserialize, Serialize};

/// Audience used when the request leaves `targetAudience` empty.
pub const DEFAULT_TARGET_AUDIENCE: &str = "General Audience";

/// Language used when the request leaves `language` empty.
pub const DEFAULT_LANGUAGE: &str = "English";

/// The kind of content the model is asked to produce.
///
/// The wire values are the exact strings the web form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "30-Day Content Calendar")]
    ContentCalendar,
    #[serde(rename = "Reel Script")]
    ReelScript,
}

impl ContentType {
    pub const CALENDAR_LABEL: &'static str = "30-Day Content Calendar";
    pub const REEL_SCRIPT_LABEL: &'static str = "Reel Script";

    /// Parse the wire value. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            Self::CALENDAR_LABEL => Some(Self::ContentCalendar),
            Self::REEL_SCRIPT_LABEL => Some(Self::ReelScript),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ContentCalendar => Self::CALENDAR_LABEL,
            Self::ReelScript => Self::REEL_SCRIPT_LABEL,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How many posts of each format a content calendar must contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentMix {
    pub graphics: u64,
    pub reels: u64,
    pub motion: u64,
    pub live: u64,
}

/// Template selection plus the fields only that template uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentRequest {
    ContentCalendar { mix: ContentMix },
    ReelScript,
}

impl ContentRequest {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::ContentCalendar { .. } => ContentType::ContentCalendar,
            Self::ReelScript => ContentType::ReelScript,
        }
    }
}

/// A validated generation request, ready for prompt building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub business_name: String,
    pub niche: String,
    pub target_audience: String,
    pub tone: String,
    pub language: String,
    pub content: ContentRequest,
}

/// The inbound form payload as submitted, before validation.
///
/// Every field is optional here; [`super::validate_payload`] decides what
/// is required. Counts arrive either as JSON numbers or as the string value
/// of a number input, so they stay untyped until validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGenerationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics_count: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reels_count: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_count: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_count: Option<serde_json::Value>,
}
