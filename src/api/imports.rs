//! Import resolution exposed to the host script

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::helpers::{config_from_js, js_error, serialize, string_array};
use crate::import::ImportResolver;
use crate::source::ScrapboxClient;

/// Resolver bound to the project of the page being viewed
///
/// One handle should live for the whole page session so its cache is
/// shared by every block on every page.
#[wasm_bindgen]
pub struct ImportResolverHandle {
    inner: Rc<ImportResolver<ScrapboxClient>>,
    current_project: String,
}

#[wasm_bindgen]
impl ImportResolverHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(current_project: String, config: JsValue) -> Result<ImportResolverHandle, JsValue> {
        let config = config_from_js(config)?;
        let client = ScrapboxClient::new(&config);
        log::info!("import resolver ready for project {}", current_project);
        Ok(ImportResolverHandle {
            inner: Rc::new(ImportResolver::with_config(client, config)),
            current_project,
        })
    }

    /// Resolve the directives in one notation block; resolves to a string
    pub fn resolve(&self, text: String) -> Promise {
        let resolver = Rc::clone(&self.inner);
        let project = self.current_project.clone();
        future_to_promise(async move {
            resolver
                .resolve(&text, &project)
                .await
                .map(|resolved| JsValue::from_str(&resolved))
                .map_err(|e| js_error("resolve", e))
        })
    }

    /// Resolve every notation block of a page's text; resolves to `string[]`
    #[wasm_bindgen(js_name = resolvePage)]
    pub fn resolve_page(&self, page_text: String) -> Promise {
        let resolver = Rc::clone(&self.inner);
        let project = self.current_project.clone();
        future_to_promise(async move {
            resolver
                .resolve_page(&page_text, &project)
                .await
                .map(|blocks| JsValue::from(string_array(blocks)))
                .map_err(|e| js_error("resolvePage", e))
        })
    }

    #[wasm_bindgen(js_name = cacheSize)]
    pub fn cache_size(&self) -> usize {
        self.inner.cache_len()
    }

    /// Cache entries as `{ sourceKey, resolvedText }[]`
    #[wasm_bindgen(js_name = cacheEntries)]
    pub fn cache_entries(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.cache_entries(), "cacheEntries")
    }
}
