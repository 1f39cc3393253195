//! HTTP surface for the summarizer.
//!
//! `POST /api/summarize` takes `{ "url": ".." }` and sits behind the bearer
//! check, `POST /summarize` takes a form-encoded `url`, and `GET /health`
//! reports liveness.

mod auth;
mod handlers;
mod logging;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use log::info;
use std::error::Error;
use std::sync::Arc;

use crate::config::SummarizerConfig;
use crate::ThreadSummarizer;

/// Shared state handed to every handler
pub struct AppState {
    pub summarizer: ThreadSummarizer,
    pub api_secret_key: Option<String>,
}

impl AppState {
    pub fn new(summarizer: ThreadSummarizer, api_secret_key: Option<String>) -> Self {
        Self {
            summarizer,
            api_secret_key: api_secret_key.filter(|key| !key.is_empty()),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/summarize", post(handlers::summarize_json))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/summarize", post(handlers::summarize_form))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}

/// Build a summarizer from `config` and serve it until the process exits
pub async fn serve(config: SummarizerConfig) -> Result<(), Box<dyn Error>> {
    let summarizer = ThreadSummarizer::builder().config(config.clone()).build()?;
    let state = Arc::new(AppState::new(
        summarizer,
        config.server.api_secret_key.clone(),
    ));

    if state.api_secret_key.is_none() {
        info!("No API secret configured, /api routes are open");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {}", addr);
    if let Some(base_url) = &config.server.base_url {
        info!("Public URL: {}", base_url);
    }

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
