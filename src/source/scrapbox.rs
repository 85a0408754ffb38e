//! Browser page source backed by the Scrapbox REST API
//!
//! Requests go through `window.fetch`, so cookies of the logged-in user
//! apply and private projects are readable.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::PageSource;
use crate::config::ScoreboxConfig;
use crate::error::FetchError;
use crate::models::{PageLine, PageLines, PageList};

/// `fetch`-based client for `/api/pages` and `/api/code`
#[derive(Debug, Clone)]
pub struct ScrapboxClient {
    origin: String,
}

impl ScrapboxClient {
    pub fn new(config: &ScoreboxConfig) -> Self {
        Self {
            origin: config.clone().normalized().origin,
        }
    }

    fn page_url(&self, project: &str, page: &str) -> String {
        format!("{}/api/pages/{}/{}", self.origin, encode(project), encode(page))
    }

    fn code_url(&self, project: &str, page: &str, file_name: &str) -> String {
        format!(
            "{}/api/code/{}/{}/{}",
            self.origin,
            encode(project),
            encode(page),
            encode(file_name)
        )
    }

    fn list_url(&self, project: &str, limit: usize) -> String {
        format!("{}/api/pages/{}?limit={}", self.origin, encode(project), limit)
    }

    /// GET `url` and return the body as text, failing on non-2xx
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no global window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(transport_error)?
            .dyn_into()
            .map_err(|_| FetchError::Decode("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
                url: url.to_string(),
            });
        }

        let body = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        body.as_string()
            .ok_or_else(|| FetchError::Decode(format!("body of {} is not text", url)))
    }
}

impl PageSource for ScrapboxClient {
    async fn page_lines(&self, project: &str, page: &str) -> Result<Vec<PageLine>, FetchError> {
        let body = self.get_text(&self.page_url(project, page)).await?;
        let page: PageLines = serde_json::from_str(&body)?;
        Ok(page.lines)
    }

    async fn code_block(&self, project: &str, page: &str, file_name: &str) -> Result<String, FetchError> {
        self.get_text(&self.code_url(project, page, file_name)).await
    }

    async fn page_list(&self, project: &str, limit: usize) -> Result<PageList, FetchError> {
        let body = self.get_text(&self.list_url(project, limit)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn page_text(&self, project: &str, page: &str) -> Result<String, FetchError> {
        let url = format!("{}/text", self.page_url(project, page));
        self.get_text(&url).await
    }
}

fn encode(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

fn transport_error(value: JsValue) -> FetchError {
    FetchError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
