// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
///
/// Liveness stub: always reports "healthy" without checking any dependency.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("/health liveness probe");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };

    (StatusCode::OK, Json(response))
}
