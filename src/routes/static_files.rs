//! Static File Serving
//!
//! Serves the companion front-end (`index.html` plus its assets) from the
//! configured front-end directory. API routes take precedence.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing::{info, warn};

pub fn router(frontend_dir: &str) -> Router {
    let static_dir = PathBuf::from(frontend_dir);
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "Serving front-end");
    } else {
        warn!(path = %static_dir.display(), "Front-end directory not found, only the API is available");
    }

    let index_path = static_dir.join("index.html");
    let serve_dir = ServeDir::new(&static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/", get(move || serve_index(index_path.clone())))
        .fallback_service(serve_dir)
}

async fn serve_index(path: PathBuf) -> Response {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => html(content),
        Err(_) => html(fallback_index(&path)),
    }
}

fn html(content: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        content,
    )
        .into_response()
}

fn fallback_index(path: &Path) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Study Notes API</title></head>
<body>
    <h1>Study Notes API</h1>
    <p>The server is running, but no front-end was found at <code>{}</code>.</p>
    <ul>
        <li><code>POST /api/upload</code> - multipart form with a <code>file</code> field (txt, pdf, docx)</li>
        <li><code>POST /api/ask</code> - <code>{{"question": "...", "contextId": "..."}}</code></li>
        <li><code>POST /api/quiz</code> - <code>{{"contextId": "..."}}</code></li>
        <li><code>GET /api/health</code></li>
    </ul>
</body>
</html>"#,
        path.display()
    )
}
