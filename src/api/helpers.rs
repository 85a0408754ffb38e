//! Shared helpers for WASM API operations
//!
//! Conversions between Rust values and `JsValue`, and the error reporting
//! every exported function goes through.

use std::fmt::Display;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ScoreboxConfig;

/// Read an optional config object passed from JavaScript
///
/// `undefined` and `null` select the defaults; missing keys fall back
/// individually.
pub fn config_from_js(value: JsValue) -> Result<ScoreboxConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ScoreboxConfig::default());
    }

    let config: ScoreboxConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error("Invalid scorebox config", e))?;
    Ok(config.normalized())
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(error_context, e))
}

/// Strings as a JavaScript array
pub fn string_array<I, S>(items: I) -> js_sys::Array
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| JsValue::from_str(item.as_ref()))
        .collect()
}

/// Log an error and turn it into a `JsValue` for a rejected promise
pub fn js_error(context: &str, err: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
