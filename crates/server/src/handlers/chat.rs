//! # Chat Handler
//!
//! The `/chat` endpoint. A readable body always gets a 200 response; provider
//! failures are reported inside the `reply` text.

use super::{AppError, AppState};
use crate::types::ChatRequest;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use ayni::ChatReply;
use tracing::info;

#[axum::debug_handler]
pub async fn chat_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    info!(
        username = ?request.username,
        message_len = request.message.len(),
        "Received chat request"
    );

    let reply = app_state
        .chat_client
        .chat(&request.message, request.username.as_deref())
        .await;

    Ok(Json(reply))
}
