//! Namespaced preference storage for Plotter Studio.
//!
//! User state that has to survive a restart (window geometry, recent files)
//! is kept in a [`PreferenceStore`]: a key-value store partitioned into
//! namespaces, holding integers, floats, booleans, strings, and ordered
//! string sequences.
//!
//! # Stores
//!
//! - [`MemoryPreferences`] - shared in-memory store for tests and embedding
//! - [`FilePreferences`] - TOML document on disk, flushed atomically
//!
//! # File Format
//!
//! ```text
//! [window]
//! windowWidth = 1200
//! windowHeight = 1020
//! isFullscreen = "false"
//!
//! ["recent-files/Reopen"]
//! files = ["/home/me/drawing.svg", "/home/me/logo.dxf"]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use plotter_prefs::{FilePreferences, PreferenceStore};
//!
//! let prefs = FilePreferences::open(FilePreferences::default_path())?;
//! prefs.put_int("window", "windowWidth", 1200)?;
//! prefs.flush()?;
//! ```

mod error;
mod file;
mod memory;
mod store;
mod value;

pub use error::{PrefsError, Result};
pub use file::{FilePreferences, PREFERENCES_FILE_NAME};
pub use memory::MemoryPreferences;
pub use store::PreferenceStore;
pub use value::PrefValue;
