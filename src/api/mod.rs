// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module
//!
//! # Endpoints
//! - `GET /` — current `STAGE` / `TENANT` values
//! - `GET /health` — liveness check

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
///
/// Unmatched paths get axum's default 404, and non-GET methods on the
/// known paths get 405.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::env_info))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
