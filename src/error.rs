// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the environment info service

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error (bind failures, serve errors)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
