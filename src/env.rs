// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Environment snapshot reading
//!
//! `STAGE` and `TENANT` are read on every request; nothing is cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{defaults, env_vars};

/// Where environment values are looked up
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The live process environment
    #[default]
    Process,
    /// A fixed set of variables; anything not in the map is absent
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    /// Builds a fixed source from key/value pairs
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the value of `key`, or `None` when it is absent.
    ///
    /// An empty value is still a value. Non UTF-8 values are decoded lossily.
    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            EnvSource::Process => std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        }
    }

    /// Like [`get`](Self::get) but substitutes the `"not set"` sentinel
    pub fn get_or_sentinel(&self, key: &str) -> String {
        self.get(key).unwrap_or_else(|| defaults::NOT_SET.to_string())
    }

    /// Reads a fresh snapshot of `STAGE` and `TENANT`
    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot {
            stage: self.get_or_sentinel(env_vars::STAGE),
            tenant: self.get_or_sentinel(env_vars::TENANT),
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    pub stage: String,
    pub tenant: String,
}
