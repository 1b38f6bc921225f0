//! Document upload and status endpoints.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use pdfchat_chat::DocumentStatus;

use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub document: DocumentStatus,
}

// ── POST /upload ──────────────────────────────────

/// Load a PDF sent as multipart/form-data, replacing the current document.
///
/// The first field carrying a file name is used. A file with no readable
/// text still succeeds; the acknowledgement says so and nothing is loaded.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let (filename, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| (e.status(), format!("Multipart error: {}", e.body_text())))?
            .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (e.status(), format!("Failed to read file: {}", e.body_text())))?;
        break (filename, bytes);
    };
    info!(file = %filename, bytes = bytes.len(), "upload received");

    // pdf parsing is CPU bound
    let text = tokio::task::spawn_blocking(move || pdfchat_ingest::extract_plain_text(&bytes))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Extraction task failed: {e}")))?;

    let mut session = state.session.lock().await;
    let message = session.load_text(&filename, &text).content.clone();
    Ok(Json(UploadResponse {
        message,
        document: session.status(),
    }))
}

// ── GET /document ─────────────────────────────────

pub async fn document(State(state): State<Arc<AppState>>) -> Json<DocumentStatus> {
    Json(state.session.lock().await.status())
}
