//! Runtime configuration shared by the resolver and the dictionary

use serde::{Deserialize, Serialize};

pub const DEFAULT_ORIGIN: &str = "https://scrapbox.io";
pub const DEFAULT_DICTIONARY_PROJECT: &str = "abcdict";
pub const DEFAULT_DICTIONARY_LIMIT: usize = 1000;
pub const DEFAULT_NOTATION_EXTENSION: &str = ".abc";

/// Endpoints and naming conventions
///
/// Every field has a default, so a host may pass a partial object
/// (or nothing at all) from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboxConfig {
    /// Scheme and host of the wiki, without a trailing slash
    pub origin: String,
    /// Project whose pages make up the notation dictionary
    pub dictionary_project: String,
    /// Maximum number of dictionary pages requested
    pub dictionary_limit: usize,
    /// File name suffix that marks a code block as notation
    pub notation_extension: String,
}

impl Default for ScoreboxConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            dictionary_project: DEFAULT_DICTIONARY_PROJECT.to_string(),
            dictionary_limit: DEFAULT_DICTIONARY_LIMIT,
            notation_extension: DEFAULT_NOTATION_EXTENSION.to_string(),
        }
    }
}

impl ScoreboxConfig {
    /// Canonical form of a deserialized config (origin without trailing slash)
    pub fn normalized(mut self) -> Self {
        self.origin = self.origin.trim_end_matches('/').to_string();
        self
    }

    /// Whether a code block file name marks notation
    pub fn is_notation_file(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.notation_extension)
    }
}
