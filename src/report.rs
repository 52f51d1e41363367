// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Plain-text descriptions of resolved views

use bridgejs_interop::ResolvedView;
use bridgejs_interop::module_system::ES_MODULE_MARKER;
use bridgejs_value::Value;

/// Describe what `import` sees.
pub fn describe_import(view: &ResolvedView) -> String {
    match view {
        ResolvedView::Default(value) => format!("default view: default = {}", inspect(value)),
        ResolvedView::Namespace(record) => {
            format!("namespace view [{}]: {}", view.export_names().join(", "), inspect(record))
        }
    }
}

/// Describe what `require()` returns.
pub fn describe_require(value: &Value) -> String {
    let marked = value
        .as_object()
        .is_some_and(|obj| obj.get_property(ES_MODULE_MARKER).is_some_and(|p| !p.enumerable));
    if marked {
        format!("{} (with hidden {}: true)", inspect(value), ES_MODULE_MARKER)
    } else {
        inspect(value)
    }
}

/// Top-level rendering with strings quoted, so `"42"` and `42` differ.
fn inspect(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}
