// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module kind classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which module system a module was authored in.
///
/// Fixed when the module is evaluated and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// ECMAScript module (import/export)
    Esm,
    /// CommonJS module (require/module.exports)
    #[serde(alias = "cjs")]
    CommonJs,
}

impl ModuleKind {
    /// Detect module kind from file extension alone
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("mjs") | Some("mts") => Some(ModuleKind::Esm),
            Some("cjs") | Some("cts") => Some(ModuleKind::CommonJs),
            _ => None,
        }
    }

    /// Detect module kind from package.json "type" field
    pub fn from_package_type(type_field: Option<&str>) -> Self {
        match type_field {
            Some("module") => ModuleKind::Esm,
            // "commonjs", missing, or anything unrecognised
            _ => ModuleKind::CommonJs,
        }
    }

    /// Extension wins; otherwise fall back to the package type field
    pub fn detect(path: &Path, package_type: Option<&str>) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::from_package_type(package_type))
    }

    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Esm => "esm",
            ModuleKind::CommonJs => "commonjs",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
