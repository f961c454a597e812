// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod env_info;
mod health;

pub use env_info::env_info;
pub use health::{HealthResponse, health_check};
