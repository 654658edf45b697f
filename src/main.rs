//! slircbot - Straylight IRC Bot
//!
//! A single-connection IRC client that registers, joins its configured
//! channels, answers keepalive probes, and serves `!` commands and
//! conversational triggers in chat.

mod config;
mod dispatch;
mod session;
mod tables;

use crate::config::Config;
use crate::session::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration: optional TOML path from argv, env overrides on top
    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!(path = ?config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server,
        port = config.port,
        nick = %config.nick,
        channels = ?config.channels,
        "Starting slircbot"
    );

    let mut session = Session::connect(config).await?;
    session.run().await?;

    info!("Session ended");
    Ok(())
}
