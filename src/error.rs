//! Error types for page fetching and import resolution
//!
//! Fetch failures are never retried. They propagate to the caller of
//! `resolve` or `load` and abort the operation in progress.

use thiserror::Error;

/// Failure reported by a [`PageSource`](crate::source::PageSource)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    #[error("HTTP request to {url} failed: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        url: String,
    },

    /// The request never produced a response (offline, CORS, aborted)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// The page or code block does not exist in the source
    #[error("Not found: {0}")]
    NotFound(String),
}

impl FetchError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Failure while inlining `%import:` directives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A source imports itself, directly or through other pages
    #[error("Cyclic import of {key} (path: {})", .path.join(" -> "))]
    CyclicImport { key: String, path: Vec<String> },

    /// The referenced page has no code block with the notation extension
    #[error("No notation code block found on {project}/{page}")]
    MissingCodeBlock { project: String, page: String },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
