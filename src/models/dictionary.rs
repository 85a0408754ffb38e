//! Dictionary entry model

use serde::{Deserialize, Serialize};

/// A titled piece of notation offered as an IME candidate
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Page title, matched against the search key
    pub title: String,
    /// Notation body of the page's first code block
    pub notation: String,
}

impl DictionaryEntry {
    pub fn new(title: impl Into<String>, notation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notation: notation.into(),
        }
    }
}
