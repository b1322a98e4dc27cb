//! Display items handed to the menu layer.

/// Minimal info needed to show one recent file in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFileItem {
    /// Position in the list (0 = most recent).
    pub index: usize,
    /// Text shown in the menu.
    pub label: String,
    /// Opaque identifier passed back when the item is activated.
    pub id: String,
}

impl RecentFileItem {
    /// Create an item for the entry at `index`, using the path as both label
    /// and identifier.
    pub fn new(index: usize, path: &str) -> Self {
        Self {
            index,
            label: path.to_string(),
            id: path.to_string(),
        }
    }
}
