//! HTTP API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. One router serves both surfaces: the
//! webhook Meta calls and the operator endpoints (direct chat,
//! conversation inspection, outbound send).

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::context::BotContext;

/// Build the API router.
///
/// Handlers receive the shared [`BotContext`] via `State`; request and
/// response logging rides on `TraceLayer`.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: Arc<BotContext>) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::send))
        .route(
            "/conversations/:user_id",
            get(endpoints::conversations::view).delete(endpoints::conversations::clear),
        )
        .route(
            "/whatsapp/webhook",
            get(endpoints::whatsapp::verify).post(endpoints::whatsapp::receive),
        )
        .route("/whatsapp/send", post(endpoints::whatsapp::send))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
}
