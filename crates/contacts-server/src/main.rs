//! Contacts Server
//!
//! A small HTTP/JSON service managing user contact records in memory.

mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use services::UserRegistry;
use storage::UserStore;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_registry: Arc<UserRegistry>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self {
            user_registry: Arc::new(UserRegistry::new(store)),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Contacts Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    info!("Config loaded: bind={}", config.bind_address);

    let store = Arc::new(UserStore::new());
    let state = AppState::new(store);

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", config.bind_address);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/users/:id",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: SocketAddr,
}

fn load_config() -> Result<Config> {
    let bind_address = parse_bind_address(std::env::var("BIND_ADDRESS").ok())?;
    Ok(Config { bind_address })
}

fn parse_bind_address(value: Option<String>) -> Result<SocketAddr> {
    let raw = value.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
    raw.parse()
        .with_context(|| format!("Failed to parse bind address: {}", raw))
}
