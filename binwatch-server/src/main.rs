//! HTTP service exposing status and alerts of smart waste bins.

mod config;
mod error;
mod routes;

use std::future;
use std::sync::Arc;

use anyhow::{Context, Result};
use binwatch_core::{BinService, InMemoryBinStore, SystemClock};
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_level);

    // Registry lives for the whole process; nothing is persisted.
    let store = Arc::new(InMemoryBinStore::seeded());
    let service = Arc::new(BinService::new(store, Arc::new(SystemClock)));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "binwatch listening");

    axum::serve(listener, routes::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("binwatch stopped");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        future::pending::<()>().await;
    }
    info!("shutdown requested");
}
