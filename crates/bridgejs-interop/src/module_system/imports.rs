// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Binding `import` specifiers against a resolved view

use super::interop::ResolvedView;
use crate::error::{InteropError, Result};
use bridgejs_value::{Object, Slot, Value};

/// Import specifier types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `import foo from 'module'`
    Default(String),
    /// `import { foo }` or `import { foo as bar }`
    Named {
        /// Export name in the target module
        imported: String,
        /// Local binding name
        local: String,
    },
    /// `import * as foo from 'module'`
    Namespace(String),
}

impl ImportSpecifier {
    /// `import { name }` without an alias
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    /// `import { imported as local }`
    pub fn aliased(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    /// The local identifier this specifier introduces
    pub fn local(&self) -> &str {
        match self {
            ImportSpecifier::Default(local) | ImportSpecifier::Namespace(local) => local,
            ImportSpecifier::Named { local, .. } => local,
        }
    }
}

/// A local name bound to an export.
///
/// Accessor exports stay accessors; reading them is left to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Local identifier
    pub local: String,
    /// Bound value or accessor
    pub slot: Slot,
}

impl Binding {
    /// The bound value, if it is a data binding
    pub fn value(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Data(value) => Some(value),
            Slot::Accessor { .. } => None,
        }
    }
}

/// Binds every specifier of one import declaration.
///
/// Named imports are only satisfied by a namespace view; against a default
/// view they fail even when the default value has a property of that name.
pub fn bind_imports(
    module: &str,
    view: &ResolvedView,
    specifiers: &[ImportSpecifier],
) -> Result<Vec<Binding>> {
    specifiers
        .iter()
        .map(|spec| {
            let slot = match spec {
                ImportSpecifier::Default(_) => lookup(module, view, "default")?,
                ImportSpecifier::Named { imported, .. } => lookup(module, view, imported)?,
                ImportSpecifier::Namespace(_) => Slot::Data(namespace_object(view)),
            };
            Ok(Binding {
                local: spec.local().to_string(),
                slot,
            })
        })
        .collect()
}

/// The object `import * as ns` binds.
///
/// A namespace view binds the record itself; a default view binds a fresh
/// object whose only key is `default`.
pub fn namespace_object(view: &ResolvedView) -> Value {
    match view {
        ResolvedView::Namespace(record) => record.clone(),
        ResolvedView::Default(value) => {
            let mut ns = Object::new();
            ns.set("default", value.clone());
            Value::object(ns)
        }
    }
}

fn lookup(module: &str, view: &ResolvedView, name: &str) -> Result<Slot> {
    view.export_slot(name)
        .ok_or_else(|| InteropError::missing_export(module, name))
}
