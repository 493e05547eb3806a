//! HTTP front-end: query parameters in, PNG wallpapers out.
//!
//! Renders are CPU-bound and run on the blocking pool; handlers only parse, dispatch and set
//! headers.

/// JSON error responses.
pub mod error;
/// Route handlers.
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::ServiceConfig;
use crate::foundation::error::{ChronosError, ChronosResult};
use crate::render::engine::WallpaperEngine;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Render pipeline.
    pub engine: Arc<WallpaperEngine>,
    /// Service settings (cache ages).
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Bundle an engine with its settings.
    pub fn new(engine: WallpaperEngine, config: ServiceConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

/// All routes, GET only.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/calendar/generate", get(handlers::calendar_generate))
        .route("/api/generate", get(handlers::progress_generate))
        .route("/today-laptop", get(handlers::today_laptop))
        .route("/today-mobile", get(handlers::today_mobile))
        .route("/iphone-lock", get(handlers::iphone_lock))
        .with_state(state)
}

/// Bind the configured address and serve until the process stops.
pub async fn serve(state: AppState) -> ChronosResult<()> {
    let addr = state.config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ChronosError::Other(anyhow::anyhow!("bind {addr}: {e}")))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| ChronosError::Other(anyhow::anyhow!("server error: {e}")))
}
