use crate::prelude::*;
use clap::Parser;

mod error;
mod gateway;
mod generate;
mod groq;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate social media content calendars and reel scripts with Groq"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Groq API key
    #[clap(long, env = "GROQ_API_KEY", global = true, hide_env_values = true)]
    groq_api_key: Option<String>,

    /// Groq API base URL
    #[clap(
        long,
        env = "GROQ_BASE_URL",
        global = true,
        default_value = crate::groq::DEFAULT_GROQ_BASE_URL
    )]
    groq_base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "SOCIALGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the generation API (and optionally the web front end)
    Serve(crate::serve::ServeOptions),

    /// Generate content once from the command line
    Generate(crate::generate::GenerateOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env has to be loaded before clap reads env-backed flags
    dotenvy::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
