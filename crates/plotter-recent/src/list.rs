//! The recent files list.

use std::fmt;
use std::sync::Arc;

use plotter_prefs::PreferenceStore;

use crate::error::{RecentFilesError, Result};
use crate::item::RecentFileItem;

/// Number of entries kept when no capacity is given.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Key under which the ordered sequence is stored inside the namespace.
pub const FILES_KEY: &str = "files";

const NAMESPACE_PREFIX: &str = "recent-files";

/// Persistence namespace for the list owned by the menu called `label`.
pub fn namespace_for(label: &str) -> String {
    format!("{NAMESPACE_PREFIX}/{label}")
}

type SelectionListener = Box<dyn Fn(&str)>;

/// Bounded, deduplicating list of recently opened files.
///
/// Entries are ordered most recent first. Adding a path that is already
/// listed moves it to the front instead of ignoring it, and adding beyond
/// capacity evicts the oldest entry. Every mutation writes the whole sequence
/// to the preference store and flushes it before returning.
///
/// Selection listeners are plain callbacks run on the calling thread, so the
/// list is meant to be owned by the UI thread.
pub struct RecentFiles {
    label: String,
    namespace: String,
    items: Vec<String>,
    max_files: usize,
    store: Arc<dyn PreferenceStore>,
    listeners: Vec<SelectionListener>,
}

impl RecentFiles {
    /// Load the list for the menu `label` with the default capacity.
    pub fn load(label: &str, store: Arc<dyn PreferenceStore>) -> Result<Self> {
        Self::with_max_files(label, store, DEFAULT_MAX_FILES)
    }

    /// Load the list for the menu `label`, keeping at most `max_files` entries.
    ///
    /// Only reads from the store. Blank or duplicate stored entries and
    /// entries beyond capacity are dropped from the loaded list; the store
    /// itself is rewritten on the next mutation.
    pub fn with_max_files(
        label: &str,
        store: Arc<dyn PreferenceStore>,
        max_files: usize,
    ) -> Result<Self> {
        if label.trim().is_empty() {
            return Err(RecentFilesError::EmptyLabel);
        }
        if max_files == 0 {
            return Err(RecentFilesError::ZeroCapacity);
        }

        let namespace = namespace_for(label);
        let stored = store.get_ordered_strings(&namespace, FILES_KEY)?;
        let items = sanitize(label, stored, max_files);
        tracing::debug!(menu = label, count = items.len(), "Loaded recent files");

        Ok(Self {
            label: label.to_string(),
            namespace,
            items,
            max_files,
            store,
            listeners: Vec::new(),
        })
    }

    /// Add `path` as the most recent entry.
    ///
    /// Blank paths (empty, or only Unicode whitespace) are ignored without
    /// touching the store. A path already in the list is promoted to the
    /// front.
    ///
    /// # Errors
    ///
    /// Returns [`RecentFilesError::Storage`] if the write fails. The in-memory
    /// list keeps the change, so callers may continue without persistence.
    pub fn add_path(&mut self, path: &str) -> Result<()> {
        if path.trim().is_empty() {
            tracing::trace!(menu = %self.label, "Ignoring blank recent file");
            return Ok(());
        }

        if let Some(pos) = self.items.iter().position(|p| p == path) {
            let existing = self.items.remove(pos);
            self.items.insert(0, existing);
            tracing::debug!(menu = %self.label, from = pos, "Promoted recent file {path}");
        } else {
            self.items.insert(0, path.to_string());
            tracing::debug!(menu = %self.label, "Added recent file {path}");
            if self.items.len() > self.max_files {
                for evicted in self.items.drain(self.max_files..) {
                    tracing::debug!(menu = %self.label, "Evicted recent file {evicted}");
                }
            }
        }

        self.persist()
    }

    /// Same as [`add_path`](Self::add_path), with `None` treated as blank.
    pub fn add_optional_path(&mut self, path: Option<&str>) -> Result<()> {
        match path {
            Some(path) => self.add_path(path),
            None => Ok(()),
        }
    }

    /// Remove `path` from the list. Removing a path that is not listed does
    /// nothing.
    pub fn remove_filename(&mut self, path: &str) -> Result<()> {
        let Some(pos) = self.items.iter().position(|p| p == path) else {
            return Ok(());
        };
        self.items.remove(pos);
        tracing::debug!(menu = %self.label, "Removed recent file {path}");
        self.persist()
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> Result<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        self.items.clear();
        tracing::debug!(menu = %self.label, "Cleared recent files");
        self.persist()
    }

    /// Entry at `index` (0 = most recent).
    pub fn get_file(&self, index: usize) -> Result<&str> {
        self.items
            .get(index)
            .map(String::as_str)
            .ok_or(RecentFilesError::IndexOutOfRange {
                index,
                count: self.items.len(),
            })
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|p| p == path)
    }

    /// Entries in order, most recent first.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// One display item per entry, in list order.
    pub fn display_items(&self) -> Vec<RecentFileItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, path)| RecentFileItem::new(index, path))
            .collect()
    }

    /// Register a callback run with the chosen path whenever an item is
    /// activated. Callbacks run in registration order.
    pub fn add_selection_listener(&mut self, listener: impl Fn(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify every listener that the item at `index` was chosen.
    ///
    /// An out-of-range index notifies nobody.
    pub fn activate(&self, index: usize) -> Result<()> {
        let path = self.get_file(index)?;
        tracing::debug!(
            menu = %self.label,
            listeners = self.listeners.len(),
            "Activated recent file {path}"
        );
        for listener in &self.listeners {
            listener(path);
        }
        Ok(())
    }

    /// Activate a previously rendered display item.
    ///
    /// The item is looked up by identifier, so a stale item still reaches the
    /// right path after the list was reordered.
    pub fn activate_item(&self, item: &RecentFileItem) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|p| *p == item.id)
            .ok_or_else(|| RecentFilesError::UnknownItem {
                id: item.id.clone(),
            })?;
        self.activate(index)
    }

    fn persist(&self) -> Result<()> {
        self.store
            .put_ordered_strings(&self.namespace, FILES_KEY, &self.items)?;
        self.store.flush()?;
        Ok(())
    }
}

impl fmt::Debug for RecentFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentFiles")
            .field("label", &self.label)
            .field("items", &self.items)
            .field("max_files", &self.max_files)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Drop entries a well-behaved writer would never have stored.
fn sanitize(label: &str, stored: Vec<String>, max_files: usize) -> Vec<String> {
    let mut items: Vec<String> = Vec::with_capacity(stored.len().min(max_files));
    for path in stored {
        if path.trim().is_empty() {
            tracing::warn!(menu = label, "Dropping blank stored recent file");
            continue;
        }
        if items.contains(&path) {
            tracing::warn!(menu = label, "Dropping duplicate stored recent file {path}");
            continue;
        }
        items.push(path);
    }
    if items.len() > max_files {
        tracing::warn!(
            menu = label,
            stored = items.len(),
            max_files,
            "Truncating stored recent files to capacity"
        );
        items.truncate(max_files);
    }
    items
}
