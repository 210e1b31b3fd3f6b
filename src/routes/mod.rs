//! API Routes
//!
//! - `/api/upload` - Upload a document, extract and summarize it
//! - `/api/ask` - Ask a question about an uploaded document
//! - `/api/quiz` - Generate a multiple-choice quiz from an uploaded document
//! - `/api/health` - Health check
//! - `/` - Static file serving (front-end)

pub mod ask;
pub mod health;
pub mod quiz;
pub mod static_files;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);
    let frontend_dir = state.config.server.frontend_dir.clone();

    let api_router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(ask::router(state.clone()))
        .merge(quiz::router(state.clone()))
        .merge(health::router(state));

    Router::new()
        .merge(api_router)
        .merge(static_files::router(&frontend_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
