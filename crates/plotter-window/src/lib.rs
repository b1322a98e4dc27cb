//! Main window geometry persistence.
//!
//! The window's size, position, and fullscreen flag are stored under the
//! `window` namespace of a [`PreferenceStore`] and restored at startup,
//! adjusted so the window always fits on the current screen.

use plotter_prefs::{PrefValue, PreferenceStore, Result};

pub const WINDOW_NAMESPACE: &str = "window";

pub const KEY_WIDTH: &str = "windowWidth";
pub const KEY_HEIGHT: &str = "windowHeight";
pub const KEY_X: &str = "windowX";
pub const KEY_Y: &str = "windowY";
pub const KEY_FULLSCREEN: &str = "isFullscreen";

/// Size used when nothing is stored.
pub const DEFAULT_WIDTH: i64 = 1200;
pub const DEFAULT_HEIGHT: i64 = 1020;

/// Smallest restored size, unless the screen itself is smaller.
pub const MIN_WIDTH: i64 = 640;
pub const MIN_HEIGHT: i64 = 480;

/// Usable screen area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i64,
    pub height: i64,
}

impl ScreenSize {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// Main window rectangle and fullscreen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i64,
    pub height: i64,
    pub x: i64,
    pub y: i64,
    pub fullscreen: bool,
}

impl WindowGeometry {
    /// A window of the given size centered on `screen`, size clamped first.
    pub fn centered(width: i64, height: i64, screen: ScreenSize) -> Self {
        let width = clamp_extent(width, MIN_WIDTH, screen.width);
        let height = clamp_extent(height, MIN_HEIGHT, screen.height);
        Self {
            width,
            height,
            x: (screen.width - width) / 2,
            y: (screen.height - height) / 2,
            fullscreen: false,
        }
    }

    /// Restore the stored geometry, fitted to `screen`.
    ///
    /// A missing size falls back to the default; a missing position centers
    /// the window. A stored position is clamped so the whole window stays on
    /// screen.
    pub fn restore(store: &dyn PreferenceStore, screen: ScreenSize) -> Result<Self> {
        let width = store
            .get_int(WINDOW_NAMESPACE, KEY_WIDTH)?
            .unwrap_or(DEFAULT_WIDTH);
        let height = store
            .get_int(WINDOW_NAMESPACE, KEY_HEIGHT)?
            .unwrap_or(DEFAULT_HEIGHT);
        let mut geometry = Self::centered(width, height, screen);

        let x = store.get_int(WINDOW_NAMESPACE, KEY_X)?;
        let y = store.get_int(WINDOW_NAMESPACE, KEY_Y)?;
        if let (Some(x), Some(y)) = (x, y) {
            geometry.x = x.clamp(0, (screen.width - geometry.width).max(0));
            geometry.y = y.clamp(0, (screen.height - geometry.height).max(0));
        }

        geometry.fullscreen = read_fullscreen(store)?;

        tracing::debug!(?geometry, "Restored window geometry");
        Ok(geometry)
    }

    /// Store this geometry and flush it.
    pub fn save(&self, store: &dyn PreferenceStore) -> Result<()> {
        store.put_int(WINDOW_NAMESPACE, KEY_WIDTH, self.width)?;
        store.put_int(WINDOW_NAMESPACE, KEY_HEIGHT, self.height)?;
        store.put_int(WINDOW_NAMESPACE, KEY_X, self.x)?;
        store.put_int(WINDOW_NAMESPACE, KEY_Y, self.y)?;
        store.put_string(
            WINDOW_NAMESPACE,
            KEY_FULLSCREEN,
            if self.fullscreen { "true" } else { "false" },
        )?;
        store.flush()
    }
}

/// The flag is written as the string `"true"`/`"false"`; a TOML boolean from
/// a hand-edited file is accepted too.
fn read_fullscreen(store: &dyn PreferenceStore) -> Result<bool> {
    Ok(match store.get(WINDOW_NAMESPACE, KEY_FULLSCREEN)? {
        Some(PrefValue::Bool(value)) => value,
        Some(PrefValue::Text(value)) => value == "true",
        Some(other) => {
            tracing::warn!(
                found = other.kind(),
                "Ignoring {WINDOW_NAMESPACE}/{KEY_FULLSCREEN}, expected a boolean"
            );
            false
        }
        None => false,
    })
}

/// Clamp to `[min, available]`, giving way to `available` on tiny screens.
fn clamp_extent(value: i64, min: i64, available: i64) -> i64 {
    let available = available.max(1);
    value.min(available).max(min.min(available))
}
