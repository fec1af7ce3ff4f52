//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::context::BotContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub pinned_model: Option<String>,
    pub active_conversations: usize,
    pub catalog_size: usize,
    pub started_at: DateTime<Utc>,
}

/// `GET /api/health` — liveness probe with a service snapshot.
pub async fn check(State(ctx): State<Arc<BotContext>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        pinned_model: ctx.chain.pinned_model(),
        active_conversations: ctx.store.user_count().unwrap_or(0),
        catalog_size: crate::bulario::CATALOG.len(),
        started_at: ctx.started_at,
    })
}
