mod chat;
mod config;
mod directory;
mod errors;
mod models;
mod predict;
mod routes;
mod state;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::ChatClient;
use crate::config::Config;
use crate::directory::generator::generate_dataset;
use crate::predict::snapshot::load_snapshot;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AdmitPath API v{}", env!("CARGO_PKG_VERSION"));

    // Build the synthetic directory (fresh every boot, never mutated after)
    let colleges = Arc::new(generate_dataset());
    info!("Synthetic directory generated ({} records)", colleges.len());

    // Load the cutoff snapshot, if one is on disk
    let cutoffs = Arc::new(load_snapshot(config.college_data_path.as_deref()));

    let upstream = UpstreamClient::new(config.upstream_base_url.clone());
    info!("Recommendation upstream: {}", upstream.base_url());

    let chat = match &config.gemini_api_key {
        Some(key) => {
            info!("Chat proxy enabled (primary model: {})", chat::PRIMARY_MODEL);
            Some(ChatClient::new(key.clone()))
        }
        None => {
            info!("GEMINI_API_KEY unset; chat proxy disabled");
            None
        }
    };

    let state = AppState {
        colleges,
        cutoffs,
        upstream,
        chat,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front-end calls from any origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
