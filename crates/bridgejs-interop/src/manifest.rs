// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module manifests
//!
//! A manifest stands in for the evaluator: it lists modules with their kind
//! and final exports as JSON.
//!
//! ```json
//! {
//!   "packageType": "module",
//!   "modules": [
//!     { "specifier": "./greet.js", "exports": { "default": { "$function": "greet" } } },
//!     { "specifier": "./legacy.cjs", "exports": { "bar": "hello" } }
//!   ]
//! }
//! ```
//!
//! `{"$function": name}` becomes a native function returning its first
//! argument; any other keys next to `$function` become own properties of that
//! function. `{"$getter": name}` as a property value becomes an accessor.
//! JSON arrays become array objects.

use crate::error::{InteropError, Result};
use crate::module_system::{
    FlagPolicy, ModuleKind, ModuleRecord, ModuleRegistry, has_es_module_flag,
};
use bridgejs_value::{Object, Property, Value};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const FUNCTION_KEY: &str = "$function";
const GETTER_KEY: &str = "$getter";

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Parsed manifest file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// package.json "type" field that applies to extensionless kinds
    #[serde(default)]
    pub package_type: Option<String>,
    /// Module entries
    pub modules: Vec<ModuleEntry>,
}

/// One module in a manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleEntry {
    /// Module specifier
    pub specifier: String,
    /// Explicit module kind; detected from the specifier when absent
    #[serde(default)]
    pub kind: Option<ModuleKind>,
    /// Final exports
    pub exports: serde_json::Value,
}

impl Manifest {
    /// Parse a manifest from JSON text
    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content)?;
        debug!(path = %path.display(), modules = manifest.modules.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Kind of an entry, explicit or detected
    pub fn kind_of(&self, entry: &ModuleEntry) -> ModuleKind {
        entry.kind.unwrap_or_else(|| {
            ModuleKind::detect(Path::new(&entry.specifier), self.package_type.as_deref())
        })
    }

    /// Convert every entry into a module record, reading `__esModule` on
    /// CommonJS exports with `policy`.
    ///
    /// Fails on the first entry that cannot be converted, on an ES module
    /// whose exports are not an object, and on a specifier listed twice.
    pub fn records(&self, policy: FlagPolicy) -> Result<Vec<ModuleRecord>> {
        let mut seen = HashSet::new();
        self.modules
            .iter()
            .map(|entry| {
                if !seen.insert(entry.specifier.as_str()) {
                    return Err(InteropError::AlreadyRegistered(entry.specifier.clone()));
                }
                let exports = json_to_value(&entry.exports)?;
                let kind = self.kind_of(entry);
                let has_es_module_flag = match kind {
                    ModuleKind::CommonJs => has_es_module_flag(&exports, policy),
                    ModuleKind::Esm if exports.as_object().is_none() => {
                        return Err(InteropError::invalid_manifest(format!(
                            "ES module '{}' must export an object of named bindings",
                            entry.specifier
                        )));
                    }
                    ModuleKind::Esm => false,
                };
                Ok(ModuleRecord {
                    specifier: entry.specifier.clone(),
                    kind,
                    exports,
                    has_es_module_flag,
                })
            })
            .collect()
    }

    /// Register every module into `registry`.
    ///
    /// Either all modules are registered or, on error, none are.
    pub fn register_into(&self, registry: &ModuleRegistry) -> Result<()> {
        let records = self.records(registry.policy())?;
        registry.register_all(records)
    }

    /// Build a fresh registry from this manifest
    pub fn into_registry(self, registry: ModuleRegistry) -> Result<ModuleRegistry> {
        self.register_into(&registry)?;
        Ok(registry)
    }
}

fn echo_first(args: &[Value]) -> std::result::Result<Value, String> {
    Ok(args.first().cloned().unwrap_or_default())
}

fn getter_stub(_args: &[Value]) -> std::result::Result<Value, String> {
    Ok(Value::Undefined)
}

/// Convert serde_json::Value to a JavaScript value
fn json_to_value(json: &serde_json::Value) -> Result<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(arr) => {
            let items = arr.iter().map(json_to_value).collect::<Result<Vec<_>>>()?;
            Value::object(Object::array(items))
        }
        serde_json::Value::Object(map) => {
            if map.contains_key(GETTER_KEY) {
                return Err(InteropError::invalid_manifest(
                    "\"$getter\" is only allowed as a property value",
                ));
            }
            match map.get(FUNCTION_KEY) {
                Some(name) => {
                    let name = special_name(name, FUNCTION_KEY)?;
                    let properties = properties_of(map, Some(FUNCTION_KEY))?;
                    Value::function_with_properties(name, 1, echo_first, properties)
                }
                None => Value::object(properties_of(map, None)?),
            }
        }
    })
}

/// Builds a property table from a JSON object, leaving out `skip`.
fn properties_of(map: &JsonMap, skip: Option<&str>) -> Result<Object> {
    let mut obj = Object::new();
    for (key, value) in map {
        if Some(key.as_str()) == skip {
            continue;
        }
        match value {
            serde_json::Value::Object(inner) if inner.contains_key(GETTER_KEY) => {
                if inner.len() != 1 {
                    return Err(InteropError::invalid_manifest(
                        "\"$getter\" cannot be combined with other keys",
                    ));
                }
                let name = special_name(&inner[GETTER_KEY], GETTER_KEY)?;
                let getter = Value::function(name, 0, getter_stub);
                obj.define(key.clone(), Property::accessor(Some(getter), None));
            }
            _ => obj.set(key.clone(), json_to_value(value)?),
        }
    }
    Ok(obj)
}

fn special_name<'a>(value: &'a serde_json::Value, key: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| InteropError::invalid_manifest(format!("\"{}\" expects a string name", key)))
}
