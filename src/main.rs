// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use env_info_service::{Config, Result, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;
    tracing::info!("Loaded configuration: port {}", config.port);

    server::run(config).await
}

fn setup_tracing() {
    // RUST_LOG wins; "info" when unset or invalid
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
