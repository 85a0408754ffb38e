//! Import references and cached resolutions
//!
//! An import directive names another page, optionally in another project.
//! Resolved imports are cached under their source key (`project/page`).

use serde::{Deserialize, Serialize};

/// Target of an `%import:` directive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportReference {
    pub project: String,
    pub page: String,
}

impl ImportReference {
    pub fn new(project: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            page: page.into(),
        }
    }

    /// Parse a reference string relative to the current project
    ///
    /// `"other/page"` names a page in project `other`; a bare `"page"`
    /// (or one whose only slash is leading, like `"/page"`) stays in
    /// `current_project`.
    pub fn parse(reference: &str, current_project: &str) -> Self {
        match reference.find('/') {
            Some(idx) if idx > 0 => {
                Self::new(&reference[..idx], &reference[idx + 1..])
            }
            _ => Self::new(current_project, reference),
        }
    }

    /// Cache identity of this reference
    pub fn source_key(&self) -> String {
        format!("{}/{}", self.project, self.page)
    }
}

/// One resolved import, as exposed by the resolver cache
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionCacheEntry {
    pub source_key: String,
    pub resolved_text: String,
}
