//! TOML file backed preference store.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{PrefsError, Result};
use crate::store::PreferenceStore;
use crate::value::{PrefValue, PrefsDocument};

/// File name used inside the platform config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Preference store persisted as a TOML document, one table per namespace.
///
/// Writes are kept in memory until [`flush`](PreferenceStore::flush), which
/// replaces the file atomically (temp file + rename).
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    state: Mutex<FileState>,
}

#[derive(Debug, Default)]
struct FileState {
    document: PrefsDocument,
    dirty: bool,
}

impl FilePreferences {
    /// Open the store at `path`.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first flush that has something to write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| PrefsError::Deserialization {
                    path: path.clone(),
                    source: Box::new(e),
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No preferences at {}, starting empty", path.display());
                PrefsDocument::default()
            }
            Err(e) => {
                return Err(PrefsError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };

        Ok(Self {
            path,
            state: Mutex::new(FileState {
                document,
                dirty: false,
            }),
        })
    }

    /// Get the default preferences file path.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "PlotterStudio", "Plotter")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> Result<bool> {
        Ok(self.lock()?.dirty)
    }

    fn lock(&self) -> Result<MutexGuard<'_, FileState>> {
        self.state.lock().map_err(|_| PrefsError::Poisoned)
    }

    fn mutate(&self, change: impl FnOnce(&mut PrefsDocument) -> bool) -> Result<()> {
        let mut state = self.lock()?;
        if change(&mut state.document) {
            state.dirty = true;
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.lock()?.document.get(namespace, key).cloned())
    }

    fn put(&self, namespace: &str, key: &str, value: PrefValue) -> Result<()> {
        self.mutate(|doc| doc.put(namespace, key, value))
    }

    fn remove(&self, namespace: &str, key: &str) -> Result<()> {
        self.mutate(|doc| doc.remove(namespace, key))
    }

    fn clear(&self, namespace: &str) -> Result<()> {
        self.mutate(|doc| doc.clear(namespace))
    }

    fn flush(&self) -> Result<()> {
        let mut state = self.lock()?;
        if !state.dirty {
            return Ok(());
        }

        let content = toml::to_string_pretty(&state.document)
            .map_err(|e| PrefsError::Serialization {
                source: Box::new(e),
            })?;
        write_atomic(&self.path, content.as_bytes())?;
        state.dirty = false;

        tracing::info!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

/// Write `bytes` to `path` through a synced temp file and a rename, so a
/// crash never leaves a half-written preferences file behind.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PrefsError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PrefsError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| PrefsError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PrefsError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PrefsError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}
