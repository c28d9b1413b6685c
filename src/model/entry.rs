use serde::{Deserialize, Serialize};

/// A saved playlist link
///
/// An entry has no id field; its identity is its position in the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Playlist URL
    pub url: String,

    /// Free-text label used for grouping
    pub label: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}
