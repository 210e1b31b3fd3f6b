use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::agents::QaAgent;
use crate::models::{AppState, AskRequest, AskResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", post(ask))
        .with_state(state)
}

/// POST /api/ask
///
/// `contextId` is optional. A missing or unknown id answers against empty notes
/// instead of failing.
async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let question = request
        .question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("No question provided".to_string()))?;

    let context_text = match request.context_id.as_deref().filter(|id| !id.is_empty()) {
        Some(context_id) => match state.contexts.get(context_id).await {
            Some(context) => context.text,
            None => {
                debug!(context_id, "Unknown contextId, answering without notes");
                String::new()
            }
        },
        None => String::new(),
    };

    let answer = QaAgent::answer(&state.llm, &state.config.llm, &context_text, &question).await?;

    Ok(Json(AskResponse { answer }))
}
