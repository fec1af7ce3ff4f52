//! Service entrypoint: load configuration, wire the context, serve until
//! Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use farmazap::api::ApiServer;
use farmazap::config::{self, Settings};
use farmazap::context::BotContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; deployments usually set the environment directly
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = Settings::from_env().context("Invalid configuration")?;
    let bind_addr = settings.bind_addr;
    let ctx = Arc::new(BotContext::from_settings(settings));

    let mut server = ApiServer::start(ctx, bind_addr)
        .await
        .context("Failed to start API server")?;
    tracing::info!(addr = %server.local_addr(), "Listening");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to install Ctrl-C handler")?;
    tracing::info!("Shutdown requested");

    server.shutdown();
    server.wait().await;

    Ok(())
}
