// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the environment info service
//!
//! Loads the listening port from environment variables. `.env` loading is
//! done once by the binary before this runs.

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub const PORT: u16 = 8080;
    pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    /// Reported for `STAGE` / `TENANT` when the variable is absent
    pub const NOT_SET: &str = "not set";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const STAGE: &str = "STAGE";
    pub const TENANT: &str = "TENANT";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => parse_port(&raw)?,
            None => defaults::PORT,
        };

        Ok(Config { port })
    }

    /// Address the HTTP listener binds to (all interfaces)
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(defaults::HOST, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    let port = raw.trim().parse::<u16>().map_err(|e| {
        AppError::Config(format!("Invalid {} value '{}': {}", env_vars::PORT, raw, e))
    })?;

    if port == 0 {
        return Err(AppError::Config(format!(
            "{} must be between 1 and 65535",
            env_vars::PORT
        )));
    }

    Ok(port)
}
