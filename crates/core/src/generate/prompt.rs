use super::types::{ContentMix, ContentRequest, GenerationRequest};

/// Build the instruction sent to the completion model.
///
/// Dispatches on the requested content type. The output is fully
/// determined by the request fields.
pub fn build_prompt(request: &GenerationRequest) -> String {
    match &request.content {
        ContentRequest::ContentCalendar { mix } => calendar_prompt(request, mix),
        ContentRequest::ReelScript => reel_script_prompt(request),
    }
}

/// The sentence pinning how many posts of each format the calendar holds.
pub fn content_mix_rule(mix: &ContentMix) -> String {
    format!(
        "The calendar must exactly contain a total of: {} Graphics, {} Reels, {} Motion Videos, and {} Live Sessions.",
        mix.graphics, mix.reels, mix.motion, mix.live
    )
}

fn calendar_prompt(request: &GenerationRequest, mix: &ContentMix) -> String {
    let parts = [
        "You are an expert Social Media Manager.".to_string(),
        format!(
            "Create a 30-day content calendar for a business named {} in the {} industry.",
            request.business_name, request.niche
        ),
        format!("Target audience: {}.", request.target_audience),
        format!("Tone: {}.", request.tone),
        content_mix_rule(mix),
        "Output format: A clean table with columns: Day | Content Topic | Format | Visual Idea | Post Content Details.".to_string(),
        "Important Column Rules: For 'Visual Idea', if it is a Graphic provide an AI image generation prompt; if it is a Reel/Motion Video provide a detailed scene/action concept.".to_string(),
        "For 'Post Content Details', write the exact caption including a CTA and targeted hashtags.".to_string(),
        format!("Answer fully in {}.", request.language),
    ];

    parts.join(" ")
}

fn reel_script_prompt(request: &GenerationRequest) -> String {
    let parts = [
        "You are an expert video content creator.".to_string(),
        format!(
            "Write a highly engaging Reel script for {} (Industry: {}).",
            request.business_name, request.niche
        ),
        format!("Tone: {}.", request.tone),
        "Structure: 1. Hook (0-3s), 2. Body, 3. CTA.".to_string(),
        "Include camera cues.".to_string(),
        format!("Answer fully in {}.", request.language),
    ];

    parts.join(" ")
}
