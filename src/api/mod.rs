//! Scorebox WASM API
//!
//! This module provides the JavaScript-facing API used by the user script.
//! The host scrapes code blocks from the page, hands their text to an
//! [`ImportResolverHandle`] and feeds IME input to a
//! [`NotationDictionaryHandle`]; rendering and playback stay on the JS side.
//!
//! # Module Structure
//!
//! - `helpers`: config parsing, serialization and error reporting
//! - `imports`: import resolution
//! - `dictionary`: the notation IME dictionary
//! - `notation`: stateless conversion and extraction helpers

pub mod helpers;
pub mod imports;
pub mod dictionary;
pub mod notation;

pub use imports::ImportResolverHandle;
pub use dictionary::NotationDictionaryHandle;
pub use notation::{convert_to_abc_js, extract_notation_blocks_js};
