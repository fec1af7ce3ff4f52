//! Conversation inspection and reset.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::error::ApiError;
use crate::context::BotContext;
use crate::conversation::Turn;

#[derive(Serialize)]
pub struct ConversationView {
    pub user_id: String,
    pub turns: Vec<Turn>,
}

/// `GET /api/conversations/:user_id` — current history window.
pub async fn view(
    State(ctx): State<Arc<BotContext>>,
    Path(user_id): Path<String>,
) -> Result<Json<ConversationView>, ApiError> {
    let turns = ctx.store.history(&user_id)?;
    Ok(Json(ConversationView { user_id, turns }))
}

/// `DELETE /api/conversations/:user_id` — drop the history window.
pub async fn clear(
    State(ctx): State<Arc<BotContext>>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ctx.store.clear(&user_id)?;
    info!(user_id = %user_id, "Conversation cleared via API");
    Ok(StatusCode::NO_CONTENT)
}
