//! In-memory page source (useful for testing, offline hosts, etc.)

use std::cell::RefCell;
use std::collections::HashMap;

use super::PageSource;
use crate::error::FetchError;
use crate::models::{PageLine, PageList, PageSummary};
use crate::parse::{parse_blocks, ParseOptions};

/// Pages held in memory, keyed by project and title
///
/// Every request is recorded so callers can assert how often a page was
/// actually fetched.
#[derive(Debug, Default)]
pub struct MemoryPages {
    /// Titles per project, in insertion order
    order: HashMap<String, Vec<String>>,
    texts: HashMap<(String, String), String>,
    failures: HashMap<(String, String), (u16, String)>,
    code_failures: HashMap<(String, String), (u16, String)>,
    requests: RefCell<Vec<String>>,
}

impl MemoryPages {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page; `text` is the full page text including its title line
    pub fn add(mut self, project: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        let project = project.into();
        let title = title.into();
        let titles = self.order.entry(project.clone()).or_default();
        if !titles.contains(&title) {
            titles.push(title.clone());
        }
        self.texts.insert((project, title), text.into());
        self
    }

    /// Make every request for a page answer with an HTTP error
    pub fn fail(mut self, project: impl Into<String>, title: impl Into<String>, status: u16, status_text: impl Into<String>) -> Self {
        self.failures
            .insert((project.into(), title.into()), (status, status_text.into()));
        self
    }

    /// Make only code block requests for a page answer with an HTTP error
    ///
    /// Line and text requests still succeed, so a caller gets past the
    /// line scan before the code fetch fails.
    pub fn fail_code(mut self, project: impl Into<String>, title: impl Into<String>, status: u16, status_text: impl Into<String>) -> Self {
        self.code_failures
            .insert((project.into(), title.into()), (status, status_text.into()));
        self
    }

    /// Requests served so far, as `"<endpoint> <path>"` strings
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Number of requests made to one endpoint
    pub fn request_count(&self, endpoint: &str) -> usize {
        let prefix = format!("{} ", endpoint);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.starts_with(&prefix))
            .count()
    }

    fn record(&self, endpoint: &str, path: String) {
        self.requests.borrow_mut().push(format!("{} {}", endpoint, path));
    }

    fn text(&self, project: &str, page: &str) -> Result<&str, FetchError> {
        let key = (project.to_string(), page.to_string());
        if let Some((status, status_text)) = self.failures.get(&key) {
            return Err(FetchError::Status {
                status: *status,
                status_text: status_text.clone(),
                url: format!("memory://{}/{}", project, page),
            });
        }
        self.texts
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| FetchError::NotFound(format!("{}/{}", project, page)))
    }
}

impl PageSource for MemoryPages {
    async fn page_lines(&self, project: &str, page: &str) -> Result<Vec<PageLine>, FetchError> {
        self.record("lines", format!("{}/{}", project, page));
        Ok(self.text(project, page)?.lines().map(PageLine::new).collect())
    }

    async fn code_block(&self, project: &str, page: &str, file_name: &str) -> Result<String, FetchError> {
        self.record("code", format!("{}/{}/{}", project, page, file_name));
        if let Some((status, status_text)) = self
            .code_failures
            .get(&(project.to_string(), page.to_string()))
        {
            return Err(FetchError::Status {
                status: *status,
                status_text: status_text.clone(),
                url: format!("memory://{}/{}/{}", project, page, file_name),
            });
        }
        let text = self.text(project, page)?;
        parse_blocks(text, ParseOptions { has_title: true })
            .iter()
            .filter_map(|block| block.as_code_block())
            .find(|(name, _)| *name == file_name)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| FetchError::NotFound(format!("{}/{}/{}", project, page, file_name)))
    }

    async fn page_list(&self, project: &str, limit: usize) -> Result<PageList, FetchError> {
        self.record("list", format!("{}?limit={}", project, limit));
        let pages = self
            .order
            .get(project)
            .map(|titles| {
                titles
                    .iter()
                    .take(limit)
                    .map(|title| PageSummary { title: title.clone() })
                    .collect()
            })
            .unwrap_or_default();
        Ok(PageList { pages })
    }

    async fn page_text(&self, project: &str, page: &str) -> Result<String, FetchError> {
        self.record("text", format!("{}/{}", project, page));
        self.text(project, page).map(str::to_string)
    }
}
