//! Import resolution for notation blocks
//!
//! A notation block may contain `%import:<page>` or
//! `%import:<project>/<page>` lines. Each one is replaced by the resolved
//! body of the first notation code block on the referenced page.

pub mod directive;
pub mod resolver;

pub use directive::{directive_reference, has_directive, IMPORT_MARKER};
pub use resolver::ImportResolver;
