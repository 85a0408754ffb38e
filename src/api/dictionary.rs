//! Notation dictionary exposed to the IME front end

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::helpers::{config_from_js, js_error, string_array};
use crate::config::ScoreboxConfig;
use crate::dictionary::NotationDictionary;
use crate::source::ScrapboxClient;

#[wasm_bindgen]
pub struct NotationDictionaryHandle {
    inner: Rc<RefCell<NotationDictionary>>,
    config: ScoreboxConfig,
}

#[wasm_bindgen]
impl NotationDictionaryHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NotationDictionaryHandle, JsValue> {
        let config = config_from_js(config)?;
        Ok(NotationDictionaryHandle {
            inner: Rc::new(RefCell::new(NotationDictionary::new(config.clone()))),
            config,
        })
    }

    /// Fetch the dictionary project; resolves to the entry count
    ///
    /// `search` stays usable while this is pending and only offers the
    /// converted input until it completes.
    pub fn load(&self) -> Promise {
        let inner = Rc::clone(&self.inner);
        let config = self.config.clone();
        future_to_promise(async move {
            if inner.borrow().is_loaded() {
                return Ok(JsValue::from(inner.borrow().len() as u32));
            }

            let client = ScrapboxClient::new(&config);
            let mut dictionary = NotationDictionary::new(config);
            dictionary
                .load(&client)
                .await
                .map_err(|e| js_error("load dictionary", e))?;

            // A concurrent load may have finished first; keep that one
            let mut current = inner.borrow_mut();
            if !current.is_loaded() {
                *current = dictionary;
            }
            Ok::<JsValue, JsValue>(JsValue::from(current.len() as u32))
        })
    }

    /// Ranked candidates for IME input
    pub fn search(&self, input: &str) -> js_sys::Array {
        string_array(self.inner.borrow().search(input))
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().is_loaded()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.borrow().len()
    }
}
