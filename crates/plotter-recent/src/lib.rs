//! Recent files list for Plotter Studio menus.
//!
//! [`RecentFiles`] keeps the files a user opened, most recent first, bounded
//! to a fixed capacity and persisted through a
//! [`PreferenceStore`](plotter_prefs::PreferenceStore) so the menu looks the
//! same after a restart.
//!
//! The menu layer renders [`RecentFiles::display_items`] and calls
//! [`RecentFiles::activate`] when the user picks one; every registered
//! selection listener then receives the chosen path.
//!
//! ```ignore
//! use std::sync::Arc;
//! use plotter_prefs::FilePreferences;
//! use plotter_recent::RecentFiles;
//!
//! let store = Arc::new(FilePreferences::open(FilePreferences::default_path())?);
//! let mut recent = RecentFiles::load("Reopen", store)?;
//! recent.add_selection_listener(|path| println!("open {path}"));
//! recent.add_path("/home/me/drawing.svg")?;
//! recent.activate(0)?;
//! ```

mod error;
mod item;
mod list;

pub use error::{RecentFilesError, Result};
pub use item::RecentFileItem;
pub use list::{DEFAULT_MAX_FILES, FILES_KEY, RecentFiles, namespace_for};
