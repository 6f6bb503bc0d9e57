//! HTTP API for the browser client
//!
//! Chat replies are streamed as server-sent events, one `{"content": ...}`
//! frame per text delta. The follow-up classifier and the mock travel search
//! are exposed as plain JSON endpoints.

mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use eyre::{Context, Result};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm::{LlmClient, create_client};
use crate::prompts::PromptLoader;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; chat requests then fail with 500
    pub llm: Option<Arc<dyn LlmClient>>,
    pub config: Arc<Config>,
    pub prompts: Arc<PromptLoader>,
}

impl AppState {
    pub fn new(llm: Option<Arc<dyn LlmClient>>, config: Config, prompts: PromptLoader) -> Self {
        Self {
            llm,
            config: Arc::new(config),
            prompts: Arc::new(prompts),
        }
    }
}

/// Build the router with all routes and layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/search", post(handlers::search))
        .route("/api/itinerary", post(handlers::itinerary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run_server(config: Config) -> Result<()> {
    // The server still answers analyze/search without a key
    let llm = match create_client(&config.llm) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "LLM client unavailable; /api/chat will return 500");
            None
        }
    };

    let project_root = std::env::current_dir()?;
    let prompts = PromptLoader::new(config.chat.prompts_dir.as_deref(), &project_root);
    let addr = config.server.bind_addr();
    let app = router(AppState::new(llm, config, prompts));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!(%addr, "Server listening");
    println!("tripplanner listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server terminated with error")
}
