//! Data models for notation imports and the notation dictionary
//!
//! Plain serde-friendly structures shared by the resolver, the dictionary
//! and the WASM API layer.

pub mod import;
pub mod dictionary;
pub mod page;

// Re-export all model types
pub use import::*;
pub use dictionary::*;
pub use page::*;
