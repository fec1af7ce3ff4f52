//! HTTP server lifecycle.
//!
//! Binds the configured address, mounts `api_router()`, and runs axum in
//! a background tokio task. The returned handle owns a shutdown channel;
//! dropping the handle does not stop the server, `shutdown()` does.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::router::api_router;
use crate::context::BotContext;

/// Handle to a running API server.
pub struct ApiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Start the server on `addr`.
    ///
    /// Binds before returning so the caller sees bind failures
    /// synchronously, then spawns the accept loop in a background task.
    /// Pass port 0 to let the OS pick one; `local_addr()` reports the
    /// real port.
    pub async fn start(ctx: Arc<BotContext>, addr: SocketAddr) -> std::io::Result<Self> {
        // 1. Bind
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        info!(%addr, "API server binding");

        // 2. Build the router
        let app = api_router(ctx);

        // 3. Set up shutdown signal
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        // 4. Spawn server in background task
        let task = tokio::spawn(async move {
            let shutdown_signal = async move {
                let _ = shutdown_rx.await;
                info!("API server received shutdown signal");
            };

            info!(%addr, "API server started");

            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal)
                .await
            {
                error!("API server error: {e}");
            }

            info!("API server stopped");
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }

    /// Actual bound address, with the OS-assigned port when 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and drain in-flight requests.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            info!("API server shutdown signal sent");
        }
    }

    /// Wait for the background task to finish.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}
