//! Command implementations shared by the `plotter` binary and its tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use plotter_prefs::{FilePreferences, PreferenceStore};
use plotter_recent::{RecentFileItem, RecentFiles};
use plotter_window::{ScreenSize, WindowGeometry};

/// Menu label used when none is given.
pub const DEFAULT_MENU_LABEL: &str = "Reopen";

/// Snapshot of a recent files menu after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentListing {
    pub label: String,
    pub items: Vec<RecentFileItem>,
    pub max_files: usize,
}

impl RecentListing {
    fn of(recent: &RecentFiles) -> Self {
        Self {
            label: recent.label().to_string(),
            items: recent.display_items(),
            max_files: recent.max_files(),
        }
    }
}

/// Resolve the preferences file: explicit path first, platform default
/// otherwise.
pub fn resolve_prefs_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(FilePreferences::default_path, Path::to_path_buf)
}

/// Open the preference store backing every command.
pub fn open_store(path: &Path) -> Result<Arc<dyn PreferenceStore>> {
    let prefs = FilePreferences::open(path)
        .with_context(|| format!("failed to open preferences at {}", path.display()))?;
    tracing::debug!("Using preferences at {}", prefs.path().display());
    Ok(Arc::new(prefs))
}

fn load_recent(store: &Arc<dyn PreferenceStore>, label: &str) -> Result<RecentFiles> {
    RecentFiles::load(label, Arc::clone(store))
        .with_context(|| format!("failed to load recent files for menu '{label}'"))
}

pub fn list_recent(store: &Arc<dyn PreferenceStore>, label: &str) -> Result<RecentListing> {
    let recent = load_recent(store, label)?;
    Ok(RecentListing::of(&recent))
}

/// Add `paths` in order, so the last one ends up most recent.
pub fn add_recent(
    store: &Arc<dyn PreferenceStore>,
    label: &str,
    paths: &[String],
) -> Result<RecentListing> {
    let mut recent = load_recent(store, label)?;
    for path in paths {
        recent
            .add_path(path)
            .with_context(|| format!("failed to add recent file {path}"))?;
    }
    Ok(RecentListing::of(&recent))
}

pub fn remove_recent(
    store: &Arc<dyn PreferenceStore>,
    label: &str,
    path: &str,
) -> Result<RecentListing> {
    let mut recent = load_recent(store, label)?;
    recent
        .remove_filename(path)
        .with_context(|| format!("failed to remove recent file {path}"))?;
    Ok(RecentListing::of(&recent))
}

pub fn clear_recent(store: &Arc<dyn PreferenceStore>, label: &str) -> Result<()> {
    let mut recent = load_recent(store, label)?;
    recent.clear().context("failed to clear recent files")
}

/// Activate the menu item at `index` and return the path the selection
/// listener received.
///
/// Opening a file promotes it, the same way the desktop menu does.
pub fn open_recent(store: &Arc<dyn PreferenceStore>, label: &str, index: usize) -> Result<String> {
    let mut recent = load_recent(store, label)?;

    let chosen: Rc<RefCell<Option<String>>> = Rc::default();
    let sink = Rc::clone(&chosen);
    recent.add_selection_listener(move |path| {
        tracing::info!("Opening {path}");
        *sink.borrow_mut() = Some(path.to_string());
    });

    recent.activate(index)?;
    let path = chosen
        .borrow_mut()
        .take()
        .context("selection listener was not notified")?;
    recent
        .add_path(&path)
        .with_context(|| format!("failed to promote recent file {path}"))?;
    Ok(path)
}

pub fn show_window(store: &Arc<dyn PreferenceStore>, screen: ScreenSize) -> Result<WindowGeometry> {
    WindowGeometry::restore(store.as_ref(), screen).context("failed to restore window geometry")
}

pub fn save_window(store: &Arc<dyn PreferenceStore>, geometry: &WindowGeometry) -> Result<()> {
    geometry
        .save(store.as_ref())
        .context("failed to save window geometry")
}
