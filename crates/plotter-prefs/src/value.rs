//! Stored preference values and the namespaced document that holds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single stored preference value.
///
/// Serialized untagged, so a TOML scalar or string array maps directly onto
/// the matching variant. `Int` is listed before `Float` so whole numbers stay
/// integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Text(String),
    /// Ordered sequence of strings.
    List(Vec<String>),
}

impl PrefValue {
    /// Short name of the value kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::List(_) => "string list",
        }
    }
}

/// All namespaces of a store, each mapping keys to values.
///
/// Mutators report whether anything changed so stores can track dirtiness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct PrefsDocument(BTreeMap<String, BTreeMap<String, PrefValue>>);

impl PrefsDocument {
    pub(crate) fn get(&self, namespace: &str, key: &str) -> Option<&PrefValue> {
        self.0.get(namespace).and_then(|node| node.get(key))
    }

    pub(crate) fn put(&mut self, namespace: &str, key: &str, value: PrefValue) -> bool {
        let node = self.0.entry(namespace.to_string()).or_default();
        if node.get(key) == Some(&value) {
            return false;
        }
        node.insert(key.to_string(), value);
        true
    }

    pub(crate) fn remove(&mut self, namespace: &str, key: &str) -> bool {
        let Some(node) = self.0.get_mut(namespace) else {
            return false;
        };
        let removed = node.remove(key).is_some();
        if node.is_empty() {
            self.0.remove(namespace);
        }
        removed
    }

    pub(crate) fn clear(&mut self, namespace: &str) -> bool {
        self.0.remove(namespace).is_some()
    }

    pub(crate) fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
