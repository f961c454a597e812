// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Listener bootstrap
//!
//! Binds the TCP listener, serves the router and stops on Ctrl+C / SIGTERM.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::api::{AppState, create_router};
use crate::config::Config;
use crate::error::Result;

/// Binds a TCP listener on `addr`
///
/// Failure (address in use, insufficient privilege) is fatal for the process.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address {}: {}", addr, e);
        e
    })?;
    Ok(listener)
}

/// Serves the API on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
///
/// The SIGTERM handler is installed when this is called, not on first poll,
/// so a signal arriving before the returned future is polled still counts.
pub fn shutdown_signal() -> impl Future<Output = ()> + Send {
    #[cfg(unix)]
    let sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .map_err(|e| {
            tracing::warn!("Failed to install SIGTERM handler: {}", e);
            e
        })
        .ok();

    async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            match sigterm {
                Some(mut sigterm) => {
                    sigterm.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }
}

/// Runs the service with the given configuration against the process environment
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState::from_process_env());

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let signal = shutdown_signal();
    tokio::spawn(async move {
        signal.await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let addr = config.listen_addr();
    let listener = bind_listener(addr).await?;

    tracing::info!("Environment info service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - STAGE and TENANT values");
    tracing::info!("  - GET /health  - Health check");

    serve(listener, state, async move {
        let _ = shutdown_rx.changed().await;
        tracing::info!("HTTP server shutting down");
    })
    .await
}
