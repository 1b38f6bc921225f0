//! Conversation endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use pdfchat_chat::Intent;
use pdfchat_core::ChatMessage;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub intent: Intent,
    pub reply: String,
}

// ── POST /chat ────────────────────────────────────

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message must not be empty".to_string()));
    }

    let reply = state.session.lock().await.send(message);
    info!(intent = ?reply.intent, chars = reply.text.len(), "chat reply");
    Ok(Json(ChatResponse {
        intent: reply.intent,
        reply: reply.text,
    }))
}

// ── GET /history ──────────────────────────────────

pub async fn history(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    Json(state.session.lock().await.messages().to_vec())
}

// ── POST /reset ───────────────────────────────────

/// Drop the document and history; returns the fresh history.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    let mut session = state.session.lock().await;
    session.reset();
    info!(session = %session.id(), "session reset");
    Json(session.messages().to_vec())
}
