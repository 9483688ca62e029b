use crate::prelude::{eprintln, println, *};
use indicatif::{ProgressBar, ProgressStyle};
use socialgen_core::generate::{build_prompt, validate_payload, ContentType, RawGenerationPayload};

use crate::gateway::Gateway;
use crate::groq::GroqClient;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ContentTypeArg {
    /// 30-Day Content Calendar
    Calendar,
    /// Reel Script
    Reel,
}

impl From<ContentTypeArg> for ContentType {
    fn from(arg: ContentTypeArg) -> Self {
        match arg {
            ContentTypeArg::Calendar => ContentType::ContentCalendar,
            ContentTypeArg::Reel => ContentType::ReelScript,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// Name of the business the content is for
    #[arg(long)]
    pub business_name: String,

    /// Industry or niche of the business
    #[arg(long)]
    pub niche: String,

    /// Who the content is aimed at (default: General Audience)
    #[arg(long)]
    pub target_audience: Option<String>,

    /// Tone of voice, e.g. "Professional" or "Playful"
    #[arg(long)]
    pub tone: String,

    /// What to generate
    #[arg(long, value_enum, default_value = "calendar")]
    pub content_type: ContentTypeArg,

    /// Language to answer in (default: English)
    #[arg(long)]
    pub language: Option<String>,

    /// Number of graphic posts in the calendar
    #[arg(long)]
    pub graphics: Option<u64>,

    /// Number of reels in the calendar
    #[arg(long)]
    pub reels: Option<u64>,

    /// Number of motion videos in the calendar
    #[arg(long)]
    pub motion: Option<u64>,

    /// Number of live sessions in the calendar
    #[arg(long)]
    pub live: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the prompt instead of sending it to Groq
    #[arg(long)]
    pub prompt_only: bool,
}

impl GenerateOptions {
    fn to_payload(&self) -> RawGenerationPayload {
        let count = |value: Option<u64>| value.map(serde_json::Value::from);

        RawGenerationPayload {
            business_name: Some(self.business_name.clone()),
            niche: Some(self.niche.clone()),
            target_audience: self.target_audience.clone(),
            tone: Some(self.tone.clone()),
            content_type: Some(ContentType::from(self.content_type).label().to_string()),
            language: self.language.clone(),
            graphics_count: count(self.graphics),
            reels_count: count(self.reels),
            motion_count: count(self.motion),
            live_count: count(self.live),
        }
    }
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let payload = options.to_payload();

    if options.prompt_only {
        let request = validate_payload(&payload).map_err(|e| eyre!("{}", e))?;
        let prompt = build_prompt(&request);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "prompt": prompt }))?);
        } else {
            println!("{}", prompt);
        }
        return Ok(());
    }

    if global.verbose {
        eprintln!("Groq API Base: {}", global.groq_base_url);
        eprintln!("Content type: {}", ContentType::from(options.content_type));
    }

    let gateway = Gateway::new(
        global.groq_api_key.clone(),
        GroqClient::new(&global.groq_base_url),
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map_err(|e| eyre!("Invalid spinner template: {}", e))?,
    );
    spinner.set_message(f!("Generating {}...", ContentType::from(options.content_type)));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = gateway.generate(&payload).await;
    spinner.finish_and_clear();

    let text = result.map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "text": text }))?);
    } else {
        println!("{}", text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, clap::Parser)]
    struct TestCli {
        #[clap(flatten)]
        options: GenerateOptions,
    }

    fn parse(args: &[&str]) -> GenerateOptions {
        let mut argv = vec!["socialgen"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).options
    }

    #[test]
    fn test_calendar_flags_become_payload() {
        let options = parse(&[
            "--business-name",
            "Kopi Kita",
            "--niche",
            "Coffee shop",
            "--tone",
            "Playful",
            "--graphics",
            "5",
            "--live",
            "1",
        ]);

        let payload = options.to_payload();
        assert_eq!(payload.content_type.as_deref(), Some("30-Day Content Calendar"));
        assert_eq!(payload.graphics_count, Some(serde_json::json!(5)));
        assert_eq!(payload.reels_count, None);
        assert_eq!(payload.live_count, Some(serde_json::json!(1)));

        let prompt = build_prompt(&validate_payload(&payload).unwrap());
        assert!(prompt.contains("5 Graphics, 0 Reels, 0 Motion Videos, and 1 Live Sessions."));
    }

    #[test]
    fn test_reel_flags_become_payload() {
        let options = parse(&[
            "--business-name",
            "Kopi Kita",
            "--niche",
            "Coffee shop",
            "--tone",
            "Playful",
            "--content-type",
            "reel",
            "--language",
            "Spanish",
            "--prompt-only",
        ]);

        assert!(options.prompt_only);
        let payload = options.to_payload();
        assert_eq!(payload.content_type.as_deref(), Some("Reel Script"));
        assert_eq!(payload.language.as_deref(), Some("Spanish"));
    }
}
