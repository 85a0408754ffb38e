//! Page sources
//!
//! The resolver and the dictionary never talk to the network directly.
//! They read pages through a [`PageSource`]: [`ScrapboxClient`] in the
//! browser, [`MemoryPages`] in tests and offline hosts.

pub mod memory;
pub mod scrapbox;

pub use memory::MemoryPages;
pub use scrapbox::ScrapboxClient;

use crate::error::FetchError;
use crate::models::{PageLine, PageList};

/// Read access to wiki pages
///
/// Every method may suspend on I/O. Implementations run on a single
/// thread, so the futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Lines of a page, title line first
    async fn page_lines(&self, project: &str, page: &str) -> Result<Vec<PageLine>, FetchError>;

    /// Raw body of the code block named `file_name` on a page
    async fn code_block(&self, project: &str, page: &str, file_name: &str) -> Result<String, FetchError>;

    /// Up to `limit` pages of a project
    async fn page_list(&self, project: &str, limit: usize) -> Result<PageList, FetchError>;

    /// Full text of a page, title line first
    async fn page_text(&self, project: &str, page: &str) -> Result<String, FetchError>;
}
