// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Registry of evaluated modules, serving `require` and `import`

use super::imports::{Binding, ImportSpecifier, bind_imports};
use super::inspector::{FlagPolicy, has_es_module_flag};
use super::interop::{ResolvedView, resolve_for_foreign_require, resolve_for_native_import};
use super::kind::ModuleKind;
use crate::error::{InteropError, Result};
use bridgejs_value::{Object, Value};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace};

/// A fully evaluated module, as handed over by the evaluator.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    /// The specifier the module is registered under
    pub specifier: String,
    /// Module system the module was authored in
    pub kind: ModuleKind,
    /// `module.exports` for CommonJS, the namespace record for ESM
    pub exports: Value,
    /// Whether the export object carries `__esModule`
    pub has_es_module_flag: bool,
}

impl ModuleRecord {
    /// What `require()` of this module returns
    pub fn require(&self) -> Value {
        resolve_for_foreign_require(self.kind, &self.exports, self.has_es_module_flag)
    }

    /// What `import` of this module sees
    pub fn import(&self) -> ResolvedView {
        resolve_for_native_import(self.kind, &self.exports, self.has_es_module_flag)
    }
}

/// Both sides of the bridge for one module
#[derive(Debug, Clone)]
pub struct ModuleReport {
    /// The module record
    pub record: Arc<ModuleRecord>,
    /// Result of `require()`
    pub required: Value,
    /// Result of `import`
    pub imported: ResolvedView,
}

/// Thread-safe store of evaluated modules.
///
/// Records are immutable once registered.
pub struct ModuleRegistry {
    /// Records keyed by specifier
    modules: DashMap<String, Arc<ModuleRecord>>,
    /// How `__esModule` is read on CommonJS exports
    policy: FlagPolicy,
}

impl ModuleRegistry {
    /// Create an empty registry with the default flag policy
    pub fn new() -> Self {
        Self::with_policy(FlagPolicy::default())
    }

    /// Create an empty registry with an explicit flag policy
    pub fn with_policy(policy: FlagPolicy) -> Self {
        Self {
            modules: DashMap::new(),
            policy,
        }
    }

    /// The flag policy used for CommonJS registrations
    pub fn policy(&self) -> FlagPolicy {
        self.policy
    }

    /// Register an evaluated module record
    pub fn register(&self, record: ModuleRecord) -> Result<()> {
        match self.modules.entry(record.specifier.clone()) {
            Entry::Occupied(entry) => Err(InteropError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                trace!(
                    specifier = %record.specifier,
                    kind = %record.kind,
                    es_module = record.has_es_module_flag,
                    "registered module"
                );
                entry.insert(Arc::new(record));
                Ok(())
            }
        }
    }

    /// Register a batch of records, all or none.
    ///
    /// On the first conflict every record of the batch registered so far is
    /// taken back out, so readers never keep a partial batch.
    pub fn register_all(&self, records: Vec<ModuleRecord>) -> Result<()> {
        let mut added: Vec<String> = Vec::with_capacity(records.len());
        for record in records {
            let specifier = record.specifier.clone();
            if let Err(e) = self.register(record) {
                for specifier in &added {
                    self.modules.remove(specifier);
                }
                debug!(rolled_back = added.len(), error = %e, "batch registration failed");
                return Err(e);
            }
            added.push(specifier);
        }
        Ok(())
    }

    /// Register a CommonJS module, inspecting its exports for `__esModule`
    pub fn register_commonjs(&self, specifier: impl Into<String>, exports: Value) -> Result<()> {
        let has_es_module_flag = has_es_module_flag(&exports, self.policy);
        self.register(ModuleRecord {
            specifier: specifier.into(),
            kind: ModuleKind::CommonJs,
            exports,
            has_es_module_flag,
        })
    }

    /// Register an ES module with its namespace record
    pub fn register_esm(&self, specifier: impl Into<String>, namespace: Object) -> Result<()> {
        self.register(ModuleRecord {
            specifier: specifier.into(),
            kind: ModuleKind::Esm,
            exports: Value::object(namespace),
            has_es_module_flag: false,
        })
    }

    /// Get a registered module
    pub fn get(&self, specifier: &str) -> Option<Arc<ModuleRecord>> {
        self.modules.get(specifier).map(|entry| Arc::clone(entry.value()))
    }

    fn lookup(&self, specifier: &str) -> Result<Arc<ModuleRecord>> {
        self.get(specifier)
            .ok_or_else(|| InteropError::module_not_found(specifier))
    }

    /// `require(specifier)` from CommonJS code
    pub fn require(&self, specifier: &str) -> Result<Value> {
        let record = self.lookup(specifier)?;
        let value = record.require();
        debug!(
            specifier,
            kind = %record.kind,
            result = value.type_of(),
            "require resolved"
        );
        Ok(value)
    }

    /// `import` of `specifier` from ES module code
    pub fn import(&self, specifier: &str) -> Result<ResolvedView> {
        let record = self.lookup(specifier)?;
        let view = record.import();
        debug!(
            specifier,
            kind = %record.kind,
            es_module = record.has_es_module_flag,
            namespace = view.is_namespace(),
            "import resolved"
        );
        Ok(view)
    }

    /// Resolve an import declaration's specifiers against `specifier`
    pub fn import_bindings(
        &self,
        specifier: &str,
        imports: &[ImportSpecifier],
    ) -> Result<Vec<Binding>> {
        let view = self.import(specifier)?;
        bind_imports(specifier, &view, imports)
    }

    /// Resolve both views for every registered module, in parallel.
    ///
    /// Reports are sorted by specifier.
    pub fn resolve_all(&self) -> Vec<ModuleReport> {
        let records: Vec<Arc<ModuleRecord>> =
            self.modules.iter().map(|entry| Arc::clone(entry.value())).collect();

        let mut reports: Vec<ModuleReport> = records
            .into_par_iter()
            .map(|record| ModuleReport {
                required: record.require(),
                imported: record.import(),
                record,
            })
            .collect();
        reports.sort_by(|a, b| a.record.specifier.cmp(&b.record.specifier));
        reports
    }

    /// All registered specifiers, sorted
    pub fn specifiers(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.modules.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Check if a module is registered
    pub fn has(&self, specifier: &str) -> bool {
        self.modules.contains_key(specifier)
    }

    /// Get the number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
