//! In-memory preference store.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{PrefsError, Result};
use crate::store::PreferenceStore;
use crate::value::{PrefValue, PrefsDocument};

/// Preference store that lives only as long as the process.
///
/// Clones share the same underlying data, so a second handle observes every
/// write made through the first one. Flushing is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    document: Arc<Mutex<PrefsDocument>>,
}

impl MemoryPreferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all namespaces that currently hold at least one key.
    pub fn namespaces(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.namespaces().map(str::to_string).collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, PrefsDocument>> {
        self.document.lock().map_err(|_| PrefsError::Poisoned)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.lock()?.get(namespace, key).cloned())
    }

    fn put(&self, namespace: &str, key: &str, value: PrefValue) -> Result<()> {
        self.lock()?.put(namespace, key, value);
        Ok(())
    }

    fn remove(&self, namespace: &str, key: &str) -> Result<()> {
        self.lock()?.remove(namespace, key);
        Ok(())
    }

    fn clear(&self, namespace: &str) -> Result<()> {
        self.lock()?.clear(namespace);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
