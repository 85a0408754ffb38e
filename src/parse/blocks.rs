//! Structured block parser
//!
//! Wiki pages are indentation-structured: a `code:<file>` or `table:<name>`
//! line opens a block, and every following line indented deeper than the
//! opener belongs to it.

use serde::{Deserialize, Serialize};

const CODE_PREFIX: &str = "code:";
const TABLE_PREFIX: &str = "table:";

/// Parser options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat the first non-empty line as the page title
    pub has_title: bool,
}

/// A typed block of page text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Title {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    CodeBlock {
        file_name: String,
        indent: usize,
        content: String,
    },
    Table {
        name: String,
        indent: usize,
        rows: Vec<Vec<String>>,
    },
    Line {
        indent: usize,
        text: String,
    },
}

impl Block {
    /// File name and body when this is a code block
    pub fn as_code_block(&self) -> Option<(&str, &str)> {
        match self {
            Block::CodeBlock { file_name, content, .. } => Some((file_name.as_str(), content.as_str())),
            _ => None,
        }
    }
}

/// Number of leading spaces or tabs
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Split page text into blocks, in page order
pub fn parse_blocks(text: &str, options: ParseOptions) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut needs_title = options.has_title;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let indent = indent_of(line);
        let body = &line[indent..];

        if needs_title {
            if !body.trim().is_empty() {
                blocks.push(Block::Title { text: body.trim().to_string() });
                needs_title = false;
            }
            i += 1;
            continue;
        }

        if let Some(file_name) = body.strip_prefix(CODE_PREFIX) {
            let (content, next) = collect_nested(&lines, i + 1, indent);
            blocks.push(Block::CodeBlock {
                file_name: file_name.trim().to_string(),
                indent,
                content: content.join("\n"),
            });
            i = next;
        } else if let Some(name) = body.strip_prefix(TABLE_PREFIX) {
            let (rows, next) = collect_nested(&lines, i + 1, indent);
            blocks.push(Block::Table {
                name: name.trim().to_string(),
                indent,
                rows: rows
                    .into_iter()
                    .map(|row| row.split('\t').map(str::to_string).collect())
                    .collect(),
            });
            i = next;
        } else {
            blocks.push(Block::Line {
                indent,
                text: body.to_string(),
            });
            i += 1;
        }
    }

    blocks
}

/// Gather the lines nested under an opener at `indent`, with the opener's
/// indentation plus one character removed. Returns the lines and the index
/// of the first line after the block.
fn collect_nested<'a>(lines: &[&'a str], start: usize, indent: usize) -> (Vec<&'a str>, usize) {
    let mut body = Vec::new();
    let mut i = start;
    while i < lines.len() && indent_of(lines[i]) > indent {
        // indentation is ASCII, so char count equals byte offset
        body.push(&lines[i][indent + 1..]);
        i += 1;
    }
    (body, i)
}
