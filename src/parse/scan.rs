//! Line scanning for notation code blocks

use super::blocks::{parse_blocks, Block, ParseOptions};
use crate::models::PageLine;

/// File name of the first `code:` declaration ending in `extension`
///
/// Lines are scanned in page order; declarations for other languages are
/// skipped.
pub fn first_notation_code_title(lines: &[PageLine], extension: &str) -> Option<String> {
    lines.iter().find_map(|line| {
        let file_name = line.text.trim_start().strip_prefix("code:")?.trim_end();
        if file_name.ends_with(extension) {
            Some(file_name.to_string())
        } else {
            None
        }
    })
}

/// Bodies of every notation code block in `text`, in page order
pub fn extract_notation_blocks(text: &str, extension: &str) -> Vec<String> {
    parse_blocks(text, ParseOptions::default())
        .into_iter()
        .filter_map(|block| match block {
            Block::CodeBlock { file_name, content, .. } if file_name.ends_with(extension) => {
                Some(content)
            }
            _ => None,
        })
        .collect()
}
