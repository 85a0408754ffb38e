//! Stateless notation helpers

use wasm_bindgen::prelude::*;

use super::helpers::string_array;
use crate::config::DEFAULT_NOTATION_EXTENSION;
use crate::conversion::convert_to_abc;
use crate::parse::extract_notation_blocks;

/// ABC conversion of IME input, or `undefined` when nothing converts
#[wasm_bindgen(js_name = convertToAbc)]
pub fn convert_to_abc_js(input: &str) -> Option<String> {
    convert_to_abc(input)
}

/// Bodies of the `.abc` code blocks in page text
#[wasm_bindgen(js_name = extractNotationBlocks)]
pub fn extract_notation_blocks_js(page_text: &str) -> js_sys::Array {
    string_array(extract_notation_blocks(page_text, DEFAULT_NOTATION_EXTENSION))
}
