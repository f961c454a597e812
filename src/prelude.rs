// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use env_info_service::prelude::*;
//! ```

pub use crate::api::{AppState, create_router};
pub use crate::config::Config;
pub use crate::env::{EnvSnapshot, EnvSource};
pub use crate::error::{AppError, Result};
pub use crate::server::{bind_listener, run, serve};
