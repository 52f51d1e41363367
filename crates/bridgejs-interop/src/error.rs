// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the interop layer
//!
//! The resolver functions themselves are total and never fail; these errors
//! come from the registry, the import binder, and manifest/config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for interop operations
pub type Result<T> = std::result::Result<T, InteropError>;

/// Errors that can occur around module interop
#[derive(Debug, Error)]
pub enum InteropError {
    /// Module not registered
    #[error("Cannot find module '{0}'")]
    ModuleNotFound(String),

    /// Module registered twice
    #[error("Module '{0}' is already registered and cannot be redefined")]
    AlreadyRegistered(String),

    /// Named or default import the resolved view does not provide
    #[error(
        "SyntaxError: The requested module '{module}' does not provide an export named '{name}'"
    )]
    MissingExport {
        /// Module specifier
        module: String,
        /// Requested export name
        name: String,
    },

    /// Malformed module manifest
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Configuration error
    #[error("Invalid config {path}: {reason}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Reason for failure
        reason: String,
    },

    /// File system error
    #[error("File system error: {0}")]
    Fs(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl InteropError {
    /// Create a module not found error
    pub fn module_not_found(module: impl Into<String>) -> Self {
        Self::ModuleNotFound(module.into())
    }

    /// Create a missing export error
    pub fn missing_export(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingExport {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(msg: impl Into<String>) -> Self {
        Self::InvalidManifest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_node() {
        assert_eq!(
            InteropError::module_not_found("./missing.js").to_string(),
            "Cannot find module './missing.js'"
        );
        assert_eq!(
            InteropError::missing_export("./legacy.cjs", "bar").to_string(),
            concat!(
                "SyntaxError: The requested module './legacy.cjs' ",
                "does not provide an export named 'bar'"
            )
        );
    }
}
