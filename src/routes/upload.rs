use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::agents::SummaryAgent;
use crate::context_store::StoredContext;
use crate::documents::UploadedDocument;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

/// Multipart part carrying the document
const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;
    Router::new()
        .route("/api/upload", post(upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// POST /api/upload
///
/// Extract the document's text, summarize it and store both as a new context.
async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let document = match multipart {
        Ok(mut multipart) => read_file_field(&mut multipart).await?,
        Err(rejection) => {
            warn!(error = %rejection, "Upload without a multipart body");
            None
        }
    }
    .ok_or_else(|| AppError::InvalidRequest("No file uploaded".to_string()))?;

    info!(
        filename = %document.filename,
        media_type = %document.media_type,
        size = document.data.len(),
        "File upload received"
    );

    let text = tokio::task::spawn_blocking(move || document.extract_text())
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

    if text.trim().is_empty() {
        return Err(AppError::InvalidRequest("No extractable text found in file".to_string()));
    }

    let summary = SummaryAgent::summarize(&state.llm, &state.config.llm, &text).await?;

    let context_id = state
        .contexts
        .put(StoredContext {
            text: text.clone(),
            summary: summary.clone(),
        })
        .await;
    info!(context_id = %context_id, text_len = text.len(), "Context stored");

    Ok(Json(UploadResponse {
        text,
        summary,
        context_id,
    }))
}

/// First file part named `file`; other parts are skipped
async fn read_file_field(multipart: &mut Multipart) -> AppResult<Option<UploadedDocument>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        // Text fields carry no filename, even when they are named `file`
        if field.name() != Some(FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        return Ok(Some(UploadedDocument::new(
            data,
            content_type.as_deref(),
            filename.as_deref(),
        )));
    }

    Ok(None)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::InvalidRequest(e.body_text())
    }
}
