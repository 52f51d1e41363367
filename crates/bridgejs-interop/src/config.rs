// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration for bridgejs
//!
//! Read from `bridgejs.toml`:
//!
//! ```toml
//! flag_policy = "truthy"
//! log_level = "debug"
//! ```

use crate::error::{InteropError, Result};
use crate::module_system::FlagPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "bridgejs.toml";

/// Interop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How `__esModule` on CommonJS exports is read
    pub flag_policy: FlagPolicy,

    /// Log filter directive used when `--verbose` is not given
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flag_policy: FlagPolicy::Presence,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| InteropError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `bridgejs.toml` from `dir` if it exists, else defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = Self::default_path(dir);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the config file inside `dir`
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }
}
