// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Environment Info Service
//!
//! Minimal HTTP service reporting the deployment `STAGE` and `TENANT`
//! environment variables as JSON, plus a liveness endpoint.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and shared state
//! - `config`: configuration management
//! - `env`: environment snapshot reading
//! - `error`: error types
//! - `server`: listener bootstrap and shutdown
//! - `prelude`: commonly used types

mod api;
mod config;
mod env;
mod error;
pub mod prelude;
pub mod server;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::HealthResponse;
pub use api::{AppState, create_router};

/// Environment snapshot types
pub use env::{EnvSnapshot, EnvSource};
