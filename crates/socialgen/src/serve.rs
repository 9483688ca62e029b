use crate::prelude::{eprintln, *};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::gateway::Gateway;
use crate::groq::{CompletionBackend, GroqClient};

pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory with the web front end, served for every path except the API
    #[arg(long, env = "PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
struct GenerateResponse {
    text: String,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let gateway = Arc::new(Gateway::new(
        global.groq_api_key.clone(),
        GroqClient::new(&global.groq_base_url),
    ));

    let app_router = router(gateway.clone(), options.public_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    eprintln!(
        "{} {}",
        "socialgen listening on".green().bold(),
        f!("http://{addr}").cyan()
    );

    if global.verbose {
        eprintln!("Generate endpoint: http://{}{}", addr, GENERATE_PATH);
        eprintln!("Groq API Base: {}", global.groq_base_url);
        if let Some(dir) = &options.public_dir {
            eprintln!("Serving static files from {}", dir.display());
        }
    }

    if !gateway.has_credential() {
        log::warn!("GROQ_API_KEY is missing or still set to the placeholder value");
        eprintln!(
            "{}",
            "WARNING: GROQ_API_KEY is missing or invalid. Add a valid Groq API key to .env so generations succeed."
                .yellow()
                .bold()
        );
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Router with the generate endpoint and, optionally, the static front end.
///
/// The endpoint accepts every method so a wrong one gets the JSON 405 body.
pub fn router<B>(gateway: Arc<Gateway<B>>, public_dir: Option<&Path>) -> Router
where
    B: CompletionBackend + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app_router = Router::new()
        .route(GENERATE_PATH, any(generate_handler::<B>))
        .with_state(gateway);

    if let Some(dir) = public_dir {
        app_router = app_router.fallback_service(ServeDir::new(dir));
    }

    app_router.layer(cors)
}

async fn generate_handler<B>(
    State(gateway): State<Arc<Gateway<B>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    B: CompletionBackend + 'static,
{
    log::info!("Received generation request: {method} {GENERATE_PATH}");

    match gateway.handle(&method, &body).await {
        Ok(text) => (StatusCode::OK, Json(GenerateResponse { text })).into_response(),
        Err(err) => {
            if err.status().is_server_error() {
                log::error!("Error generating content: {err}");
            } else {
                log::warn!("Rejected generation request: {err}");
            }
            err.into_response()
        }
    }
}
