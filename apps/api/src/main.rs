mod config;
mod contact;
mod content;
mod errors;
mod records;
mod resume;
mod routes;
mod sections;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::mailer::{HttpMailer, LogMailer, Mailer};
use crate::routes::build_router;
use crate::sections::Portfolio;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so a bad PORT fails before anything starts
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the key-value store behind the editable sections
    let kv = build_store(&config)?;
    let portfolio = Portfolio::load(kv);
    info!("Editable sections loaded");

    // Initialize outbound email
    let mailer = build_mailer(&config)?;

    let state = AppState::new(portfolio, mailer, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match &config.store_path {
        Some(path) => Ok(Arc::new(FileStore::open(path)?)),
        None => {
            warn!("STORE_PATH not set; edits are kept in memory and lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    match &config.email_api_key {
        Some(key) => {
            let mailer = HttpMailer::new(
                config.email_api_url.clone(),
                key.clone(),
                config.contact_from_address.clone(),
                config.contact_to_address.clone(),
                config.email_timeout,
            )?;
            info!("Contact relay sending via {}", config.email_api_url);
            Ok(Arc::new(mailer))
        }
        None => {
            warn!("EMAIL_API_KEY not set; contact submissions will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}
