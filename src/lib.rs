// Study Notes - upload notes, summarize them, ask questions and take quizzes

pub mod agents;
pub mod config;
pub mod context_store;
pub mod documents;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
