// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use crate::env::EnvSource;

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub env: EnvSource,
}

impl AppState {
    /// State backed by the live process environment
    pub fn from_process_env() -> Self {
        AppState {
            env: EnvSource::Process,
        }
    }
}
