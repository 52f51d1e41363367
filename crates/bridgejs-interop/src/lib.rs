// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # bridgejs-interop
//!
//! How CommonJS and ES modules see each other.
//!
//! Given a module's final exports and the module system it was written in,
//! this crate answers two questions:
//!
//! - What does `import` see? A CommonJS module without `__esModule` is one
//!   opaque default export; with the marker, or for an ES module, it is a
//!   namespace.
//! - What does `require()` see? CommonJS exports come back as-is. An ES module
//!   is wrapped with `__esModule: true`, except that a module whose only
//!   export is `default` yields that value directly, so `export default x`
//!   keeps working for callers that used `module.exports = x`.
//!
//! Named imports are never plucked off a CommonJS default export.
//!
//! ## Quick Start
//!
//! ```rust
//! use bridgejs_interop::ModuleRegistry;
//! use bridgejs_value::{js_object, Value};
//!
//! let registry = ModuleRegistry::new();
//! registry.register_esm("./answer.mjs", js_object! { "default" => 42 })?;
//! registry.register_commonjs("./legacy.cjs", Value::object(js_object! { "bar" => "hello" }))?;
//!
//! assert_eq!(registry.require("./answer.mjs")?, Value::Number(42.0));
//! assert!(registry.import("./legacy.cjs")?.get("bar").is_none());
//! # Ok::<(), bridgejs_interop::InteropError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod manifest;
pub mod module_system;

// Re-exports
pub use config::Config;
pub use error::{InteropError, Result};
pub use manifest::Manifest;
pub use module_system::{
    FlagPolicy, ImportSpecifier, ModuleKind, ModuleRecord, ModuleRegistry, ResolvedView,
    resolve_for_foreign_require, resolve_for_native_import,
};

/// Version of bridgejs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
