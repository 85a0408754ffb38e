//! `%import:` directive recognition

use lazy_static::lazy_static;
use regex::Regex;

pub const IMPORT_MARKER: &str = "%import:";

lazy_static! {
    /// Everything after the last marker on a line
    static ref IMPORT_DIRECTIVE: Regex =
        Regex::new(r"^.*%import:(.+)$").expect("import directive is a valid regex");
}

/// Reference string of a directive line, if the line is one
///
/// The marker may be preceded by other text (it is dropped along with the
/// directive). An empty or blank reference is not a directive.
pub fn directive_reference(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let reference = IMPORT_DIRECTIVE.captures(line)?.get(1)?.as_str().trim();
    if reference.is_empty() {
        None
    } else {
        Some(reference)
    }
}

/// Whether any line of `text` is a directive
pub fn has_directive(text: &str) -> bool {
    text.contains(IMPORT_MARKER) && text.lines().any(|line| directive_reference(line).is_some())
}
