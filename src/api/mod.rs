//! HTTP surface.
//!
//! Routes live under `/api/`. The router is composable: `api_router()`
//! returns a `Router` that can be mounted on any axum server instance,
//! and `ApiServer` wraps the bind/serve/shutdown lifecycle around it.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::api_router;
pub use server::ApiServer;
