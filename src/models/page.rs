//! Wire shapes of the wiki page API
//!
//! Only the fields the core reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// One line of a page as returned by the page endpoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageLine {
    pub text: String,
}

impl PageLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of `GET /api/pages/{project}/{page}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLines {
    #[serde(default)]
    pub lines: Vec<PageLine>,
}

/// Entry of a page listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
}

/// Body of `GET /api/pages/{project}?limit=N`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageList {
    #[serde(default)]
    pub pages: Vec<PageSummary>,
}
