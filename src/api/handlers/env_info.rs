// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::api::AppState;

/// GET /
///
/// Returns the current `STAGE` and `TENANT` values, or "not set" for each
/// one that is absent. Query string and body are ignored.
pub async fn env_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.env.snapshot();
    tracing::debug!(stage = %snapshot.stage, tenant = %snapshot.tenant, "/ env snapshot");

    (StatusCode::OK, Json(snapshot))
}
