//! WhatsApp Cloud API webhook endpoints.
//!
//! Meta calls `GET` once at setup time to verify ownership of the
//! callback URL, then `POST`s every event for the subscribed number.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::context::BotContext;
use crate::pipeline;
use crate::whatsapp::WebhookEvent;

/// Query parameters of Meta's verification handshake.
///
/// The dotted names are Meta's, not ours.
#[derive(Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// `GET /api/whatsapp/webhook` — verification handshake.
///
/// Echoes the challenge back when the mode is `subscribe` and the token
/// matches the configured verify token. Anything else is rejected with
/// 403 so Meta marks the endpoint as unverified.
pub async fn verify(
    State(ctx): State<Arc<BotContext>>,
    Query(params): Query<VerifyParams>,
) -> Result<String, ApiError> {
    let mode_ok = params.mode.as_deref() == Some("subscribe");
    let token_ok = params.verify_token.as_deref() == Some(ctx.settings.whatsapp_verify_token.as_str());

    if mode_ok && token_ok {
        info!("Webhook verification succeeded");
        Ok(params.challenge.unwrap_or_default())
    } else {
        warn!(
            mode = ?params.mode,
            "Webhook verification rejected: bad mode or token"
        );
        Err(ApiError::VerificationFailed)
    }
}

/// `POST /api/whatsapp/webhook` — inbound event delivery.
///
/// Always answers `EVENT_RECEIVED` with 200: a non-200 makes Meta retry
/// the delivery and eventually disable the webhook. Processing failures
/// are logged, never surfaced to Meta.
pub async fn receive(
    State(ctx): State<Arc<BotContext>>,
    Json(event): Json<WebhookEvent>,
) -> &'static str {
    for (message, text) in event.text_messages() {
        let event_id = Uuid::new_v4();
        info!(
            event_id = %event_id,
            message_id = %message.id,
            from = %message.from,
            "Processing inbound WhatsApp message"
        );

        let reply = pipeline::handle_incoming_message(&ctx, &message.from, text).await;

        if let Err(e) = ctx.messenger.send_text(&message.from, &reply).await {
            error!(
                event_id = %event_id,
                from = %message.from,
                error = %e,
                "Failed to deliver reply"
            );
        }
    }

    "EVENT_RECEIVED"
}

#[derive(Deserialize)]
pub struct SendRequest {
    pub to: String,
    pub body: String,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub status: &'static str,
}

/// `POST /api/whatsapp/send` — operator-initiated outbound message.
pub async fn send(
    State(ctx): State<Arc<BotContext>>,
    Json(req): Json<SendRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    if req.to.trim().is_empty() {
        return Err(ApiError::BadRequest("Field 'to' must not be empty".into()));
    }
    if req.body.trim().is_empty() {
        return Err(ApiError::BadRequest("Field 'body' must not be empty".into()));
    }

    ctx.messenger.send_text(&req.to, &req.body).await?;
    Ok(Json(SendResponse { status: "sent" }))
}
