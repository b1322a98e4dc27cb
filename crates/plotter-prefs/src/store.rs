//! The preference store interface.

use crate::error::{PrefsError, Result};
use crate::value::PrefValue;

/// A namespaced key-value store for user preferences.
///
/// Methods take `&self`; implementations use interior mutability so one
/// store can be shared between collaborators behind an `Arc`.
///
/// Writes are not guaranteed durable until [`flush`](Self::flush) returns.
pub trait PreferenceStore: Send + Sync {
    /// Read a raw value.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<PrefValue>>;

    /// Write a raw value, replacing any previous value of any kind.
    fn put(&self, namespace: &str, key: &str, value: PrefValue) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, namespace: &str, key: &str) -> Result<()>;

    /// Remove every key in a namespace.
    fn clear(&self, namespace: &str) -> Result<()>;

    /// Make all previous writes durable.
    fn flush(&self) -> Result<()>;

    fn get_string(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        match self.get(namespace, key)? {
            None => Ok(None),
            Some(PrefValue::Text(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(namespace, key, "string", &other)),
        }
    }

    fn put_string(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.put(namespace, key, PrefValue::Text(value.to_string()))
    }

    fn get_int(&self, namespace: &str, key: &str) -> Result<Option<i64>> {
        match self.get(namespace, key)? {
            None => Ok(None),
            Some(PrefValue::Int(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(namespace, key, "integer", &other)),
        }
    }

    fn put_int(&self, namespace: &str, key: &str, value: i64) -> Result<()> {
        self.put(namespace, key, PrefValue::Int(value))
    }

    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>> {
        match self.get(namespace, key)? {
            None => Ok(None),
            Some(PrefValue::Bool(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(namespace, key, "boolean", &other)),
        }
    }

    fn put_bool(&self, namespace: &str, key: &str, value: bool) -> Result<()> {
        self.put(namespace, key, PrefValue::Bool(value))
    }

    /// Read an ordered string sequence; a missing key reads as empty.
    fn get_ordered_strings(&self, namespace: &str, key: &str) -> Result<Vec<String>> {
        match self.get(namespace, key)? {
            None => Ok(Vec::new()),
            Some(PrefValue::List(values)) => Ok(values),
            Some(other) => Err(mismatch(namespace, key, "string list", &other)),
        }
    }

    /// Overwrite an ordered string sequence.
    fn put_ordered_strings(&self, namespace: &str, key: &str, values: &[String]) -> Result<()> {
        self.put(namespace, key, PrefValue::List(values.to_vec()))
    }
}

fn mismatch(namespace: &str, key: &str, expected: &'static str, found: &PrefValue) -> PrefsError {
    PrefsError::TypeMismatch {
        namespace: namespace.to_string(),
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}
