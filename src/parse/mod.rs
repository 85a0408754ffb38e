//! Parsing module for wiki page text
//!
//! This module splits raw page text into typed blocks and locates the
//! code blocks that hold notation.

pub mod blocks;
pub mod scan;

// Re-export commonly used types
pub use blocks::*;
pub use scan::*;
