// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CommonJS / ESM interop resolution
//!
//! Two pure functions decide what each side of the bridge observes:
//!
//! | importer  | target   | `__esModule` | result                                  |
//! |-----------|----------|--------------|-----------------------------------------|
//! | `import`  | ESM      | n/a          | namespace = record                      |
//! | `import`  | CommonJS | present      | namespace = `module.exports`            |
//! | `import`  | CommonJS | absent       | default = `module.exports`              |
//! | `require` | CommonJS | n/a          | `module.exports`                        |
//! | `require` | ESM      | n/a          | wrapper + `__esModule`, or bare default |
//!
//! Named imports are never derived from the properties of a CommonJS
//! `module.exports` value, and named exports are never folded into a default.
//! The two view shapes are exclusive.

use super::inspector::ES_MODULE_MARKER;
use super::kind::ModuleKind;
use bridgejs_value::{Object, Property, Slot, Value};

/// What a native `import` of a module sees.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView {
    /// A single `default` slot holding the whole export value
    Default(Value),
    /// The full export record; `default`, if any, is an ordinary key
    Namespace(Value),
}

impl ResolvedView {
    /// Returns true for a namespace view.
    pub fn is_namespace(&self) -> bool {
        matches!(self, ResolvedView::Namespace(_))
    }

    /// Looks up an export by name.
    ///
    /// A default view answers only to `default`. Accessor exports return
    /// `None` here; use [`ResolvedView::export_slot`] to see them.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            ResolvedView::Default(value) => (name == "default").then_some(value),
            ResolvedView::Namespace(record) => {
                record.own_properties().and_then(|obj| obj.get(name))
            }
        }
    }

    /// Looks up an export's binding slot without invoking accessors.
    pub fn export_slot(&self, name: &str) -> Option<Slot> {
        match self {
            ResolvedView::Default(value) => {
                (name == "default").then(|| Slot::Data(value.clone()))
            }
            ResolvedView::Namespace(record) => record
                .own_properties()
                .and_then(|obj| obj.get_property(name))
                .map(|prop| prop.slot.clone()),
        }
    }

    /// Export names visible through this view.
    pub fn export_names(&self) -> Vec<String> {
        match self {
            ResolvedView::Default(_) => vec!["default".to_string()],
            ResolvedView::Namespace(record) => record
                .own_properties()
                .map(|obj| obj.keys().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// The value behind the view, for whichever shape it is.
    pub fn value(&self) -> &Value {
        match self {
            ResolvedView::Default(value) | ResolvedView::Namespace(value) => value,
        }
    }
}

/// Resolves what native (`import`) code sees when importing a module.
///
/// `exports` is the module's finalized export value and `has_es_module_flag`
/// the inspector's answer for it; the flag is the only thing consulted to
/// choose between the two shapes for CommonJS targets.
pub fn resolve_for_native_import(
    target_kind: ModuleKind,
    exports: &Value,
    has_es_module_flag: bool,
) -> ResolvedView {
    match target_kind {
        ModuleKind::Esm => ResolvedView::Namespace(exports.clone()),
        ModuleKind::CommonJs if has_es_module_flag => ResolvedView::Namespace(exports.clone()),
        ModuleKind::CommonJs => ResolvedView::Default(exports.clone()),
    }
}

/// Resolves what CommonJS (`require`) code sees when loading a module.
///
/// CommonJS targets come back unchanged. ESM targets are copied into a
/// wrapper object carrying a non-enumerable `__esModule: true`; when the only
/// other enumerable key is `default`, its value is returned instead of the
/// wrapper so `export default x` behaves like `module.exports = x`.
pub fn resolve_for_foreign_require(
    target_kind: ModuleKind,
    exports: &Value,
    _has_es_module_flag: bool,
) -> Value {
    match target_kind {
        ModuleKind::CommonJs => exports.clone(),
        ModuleKind::Esm => {
            let wrapper = wrap_namespace(exports);
            match substitutable_default(&wrapper) {
                Some(default) => default,
                None => Value::object(wrapper),
            }
        }
    }
}

/// Copies every own property of an ESM record into a fresh object and marks
/// it with `__esModule` unless already present.
fn wrap_namespace(exports: &Value) -> Object {
    let mut wrapper = Object::new();
    if let Some(record) = exports.own_properties() {
        for (key, prop) in record.properties() {
            wrapper.define(key, prop.clone());
        }
    }
    if !wrapper.has(ES_MODULE_MARKER) {
        wrapper.define(ES_MODULE_MARKER, Property::hidden(Value::Boolean(true)));
    }
    wrapper
}

/// The `default` value to return in place of the wrapper, if the wrapper
/// holds nothing else.
///
/// An accessor-bound `default` is never read, so it blocks substitution.
fn substitutable_default(wrapper: &Object) -> Option<Value> {
    let mut enumerable = wrapper.enumerable_keys().filter(|k| *k != ES_MODULE_MARKER);
    match (enumerable.next(), enumerable.next()) {
        (Some("default"), None) => wrapper.get("default").cloned(),
        _ => None,
    }
}
