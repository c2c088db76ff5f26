use std::collections::BTreeMap;

use serde::Serialize;

use crate::{error::ConfigError, Result};

/// Opaque handle for a replacement policy, understood by the simulation
/// engine. Carries the engine-side class name of the policy object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PolicyHandle {
    class: String,
}

impl PolicyHandle {
    pub fn new<S: Into<String>>(class: S) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Mapping from replacement-policy names to engine handles.
///
/// Constructed once and injected into the [`Configurator`]; never mutated
/// afterwards, so shared reads from concurrent builds need no
/// synchronization.
///
/// [`Configurator`]: crate::configurator::Configurator
#[derive(Debug, Clone)]
pub struct PolicyTable {
    entries: BTreeMap<String, PolicyHandle>,
}

impl PolicyTable {
    /// The policies every engine build ships with.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("LRU".to_string(), PolicyHandle::new("LRURP"));
        entries.insert("Random".to_string(), PolicyHandle::new("RandomRP"));
        entries.insert("FIFO".to_string(), PolicyHandle::new("FIFORP"));
        Self { entries }
    }

    /// Registers an additional policy, replacing any entry with the same
    /// name. Consuming style so extended tables can be built inline.
    pub fn with_policy<S: Into<String>>(mut self, name: S, handle: PolicyHandle) -> Self {
        self.entries.insert(name.into(), handle);
        self
    }

    /// Looks up `name`, failing with [`ConfigError::UnknownPolicy`] if it is
    /// not in the table.
    pub fn resolve(&self, name: &str) -> Result<PolicyHandle> {
        match self.entries.get(name) {
            Some(handle) => Ok(handle.clone()),
            None => Err(ConfigError::UnknownPolicy {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Policy names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
