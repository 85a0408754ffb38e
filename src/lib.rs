//! Scorebox WASM Module
//!
//! Inline ABC notation support for a Scrapbox-style wiki: `%import:`
//! transclusion between notation blocks, and a notation IME that turns
//! solfège and accidental shorthand into ABC and searches a dictionary of
//! named phrases.

pub mod api;
pub mod config;
pub mod conversion;
pub mod dictionary;
pub mod error;
pub mod import;
pub mod models;
pub mod parse;
pub mod source;

// Re-export commonly used types
pub use config::ScoreboxConfig;
pub use conversion::convert_to_abc;
pub use dictionary::NotationDictionary;
pub use error::{FetchError, ResolveError, ResolveResult};
pub use import::ImportResolver;
pub use models::{DictionaryEntry, ImportReference, PageLine, PageList, PageSummary, ResolutionCacheEntry};
pub use source::{MemoryPages, PageSource, ScrapboxClient};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    log::info!("Scorebox WASM module initialized");
}
