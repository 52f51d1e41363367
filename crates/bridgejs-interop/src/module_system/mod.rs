// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Bridging CommonJS and ECMAScript Modules
//!
//! ## Resolver
//! - `resolve_for_native_import`: what `import` sees
//! - `resolve_for_foreign_require`: what `require()` sees
//!
//! ## Around it
//! - `__esModule` inspection with a configurable policy
//! - Module kind detection from `.mjs` / `.cjs` and package.json "type"
//! - Binding of default, named, and namespace import specifiers
//! - A concurrent registry of evaluated modules

mod imports;
mod inspector;
pub mod interop;
mod kind;
mod registry;

pub use imports::{Binding, ImportSpecifier, bind_imports, namespace_object};
pub use inspector::{ES_MODULE_MARKER, FlagPolicy, has_es_module_flag};
pub use interop::{ResolvedView, resolve_for_foreign_require, resolve_for_native_import};
pub use kind::ModuleKind;
pub use registry::{ModuleRecord, ModuleRegistry, ModuleReport};
