//! Direct chat endpoint.
//!
//! Runs the same pipeline as the WhatsApp webhook but returns the reply
//! in the HTTP response instead of delivering it. Used by the web widget
//! and for smoke-testing without a phone.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::context::BotContext;
use crate::pipeline;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /api/chat` — one pipeline round trip.
pub async fn send(
    State(ctx): State<Arc<BotContext>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("Field 'user_id' must not be empty".into()));
    }
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Field 'message' must not be empty".into()));
    }

    let reply = pipeline::handle_incoming_message(&ctx, &req.user_id, &req.message).await;
    Ok(Json(ChatResponse { reply }))
}
