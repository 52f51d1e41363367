// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Export-object inspection for the `__esModule` marker

use bridgejs_value::{Slot, Value};
use serde::{Deserialize, Serialize};

/// Name of the interop marker property.
pub const ES_MODULE_MARKER: &str = "__esModule";

/// How the `__esModule` property on a CommonJS export object is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagPolicy {
    /// Any own property named `__esModule` counts, whatever its value
    #[default]
    Presence,
    /// The property must be a data property holding a truthy value
    Truthy,
}

impl std::str::FromStr for FlagPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "presence" => Ok(FlagPolicy::Presence),
            "truthy" => Ok(FlagPolicy::Truthy),
            other => Err(format!(
                "unknown flag policy '{}' (expected presence or truthy)",
                other
            )),
        }
    }
}

/// Computes `has_es_module_flag` for a raw CommonJS export value.
///
/// Only own properties are checked and accessors are never invoked. Objects
/// and functions both carry own properties; primitives never have the flag.
pub fn has_es_module_flag(exports: &Value, policy: FlagPolicy) -> bool {
    let Some(obj) = exports.own_properties() else {
        return false;
    };

    match (obj.get_property(ES_MODULE_MARKER), policy) {
        (None, _) => false,
        (Some(_), FlagPolicy::Presence) => true,
        (Some(prop), FlagPolicy::Truthy) => match &prop.slot {
            Slot::Data(value) => value.to_boolean(),
            Slot::Accessor { .. } => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgejs_value::{Object, Property, js_object};

    fn noop(_args: &[Value]) -> Result<Value, String> {
        Ok(Value::Undefined)
    }

    #[test]
    fn test_presence_ignores_value() {
        let exports = Value::object(js_object! {
            "farewell" => "hello!",
            "__esModule" => false,
        });

        assert!(has_es_module_flag(&exports, FlagPolicy::Presence));
        assert!(!has_es_module_flag(&exports, FlagPolicy::Truthy));
    }

    #[test]
    fn test_non_enumerable_marker_counts() {
        let mut obj = js_object! { "farewell" => "hello!" };
        obj.define(ES_MODULE_MARKER, Property::hidden(Value::Boolean(true)));
        let exports = Value::object(obj);

        assert!(has_es_module_flag(&exports, FlagPolicy::Presence));
        assert!(has_es_module_flag(&exports, FlagPolicy::Truthy));
    }

    #[test]
    fn test_accessor_marker_is_not_invoked() {
        let mut obj = js_object! {};
        obj.define(ES_MODULE_MARKER, Property::accessor(Some(Value::Null), None));
        let exports = Value::object(obj);

        assert!(has_es_module_flag(&exports, FlagPolicy::Presence));
        assert!(!has_es_module_flag(&exports, FlagPolicy::Truthy));
    }

    #[test]
    fn test_missing_marker_and_primitives() {
        let plain = Value::object(js_object! { "bar" => "hello" });

        assert!(!has_es_module_flag(&plain, FlagPolicy::Presence));
        assert!(!has_es_module_flag(&Value::Number(42.0), FlagPolicy::Presence));
        assert!(!has_es_module_flag(&Value::Undefined, FlagPolicy::Truthy));
    }

    #[test]
    fn test_function_exports_carry_marker() {
        let mut props = Object::new();
        props.set("bar", "hello");
        props.define(ES_MODULE_MARKER, Property::hidden(Value::Boolean(true)));
        let flagged = Value::function_with_properties("main", 0, noop, props);

        assert!(has_es_module_flag(&flagged, FlagPolicy::Presence));
        assert!(has_es_module_flag(&flagged, FlagPolicy::Truthy));

        let plain = Value::function_with_properties("main", 0, noop, js_object! { "bar" => 1 });
        assert!(!has_es_module_flag(&plain, FlagPolicy::Presence));
        assert!(!has_es_module_flag(&Value::function("bare", 0, noop), FlagPolicy::Presence));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("truthy".parse::<FlagPolicy>(), Ok(FlagPolicy::Truthy));
        assert!("sometimes".parse::<FlagPolicy>().is_err());
    }
}
