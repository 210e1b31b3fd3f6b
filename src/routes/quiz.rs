use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::agents::QuizAgent;
use crate::models::{AppState, QuizRequest, QuizResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/quiz", post(quiz))
        .with_state(state)
}

/// POST /api/quiz
///
/// Unlike ask, the context must exist.
async fn quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> AppResult<Json<QuizResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let context = match request.context_id.as_deref().filter(|id| !id.is_empty()) {
        Some(context_id) => state.contexts.get(context_id).await,
        None => None,
    }
    .ok_or_else(|| AppError::InvalidRequest("Invalid or missing contextId".to_string()))?;

    let quiz = QuizAgent::generate(&state.llm, &state.config.llm, &context.text).await?;

    Ok(Json(QuizResponse { quiz }))
}
