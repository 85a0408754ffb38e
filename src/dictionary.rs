//! Notation dictionary for the score IME
//!
//! Every page of the dictionary project whose first code block is a
//! notation file becomes an entry. Searching returns the converted input
//! (when conversion applies) followed by the notation of every entry whose
//! title contains the search key, in load order.

use crate::config::ScoreboxConfig;
use crate::conversion::convert_to_abc;
use crate::error::FetchError;
use crate::models::DictionaryEntry;
use crate::parse::{parse_blocks, ParseOptions};
use crate::source::PageSource;

/// Title → notation table, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct NotationDictionary {
    config: ScoreboxConfig,
    entries: Vec<DictionaryEntry>,
    loaded: bool,
}

impl NotationDictionary {
    pub fn new(config: ScoreboxConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Build an already-loaded dictionary from known entries
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            config: ScoreboxConfig::default(),
            entries,
            loaded: true,
        }
    }

    /// Fetch the dictionary project and collect its entries
    ///
    /// Returns the number of entries. Failing to list the project fails the
    /// load; a page that cannot be fetched is skipped. Loading an already
    /// loaded dictionary does nothing.
    pub async fn load<S: PageSource>(&mut self, source: &S) -> Result<usize, FetchError> {
        if self.loaded {
            return Ok(self.entries.len());
        }

        let project = self.config.dictionary_project.clone();
        let list = source.page_list(&project, self.config.dictionary_limit).await?;
        log::info!("loading {} dictionary pages from {}", list.pages.len(), project);

        let mut entries = Vec::new();
        for page in &list.pages {
            let text = match source.page_text(&project, &page.title).await {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("skipping dictionary page {:?}: {}", page.title, err);
                    continue;
                }
            };
            if let Some(notation) = self.first_notation(&text) {
                entries.push(DictionaryEntry::new(page.title.clone(), notation));
            }
        }

        self.entries = entries;
        self.loaded = true;
        log::info!("dictionary ready with {} entries", self.entries.len());
        Ok(self.entries.len())
    }

    /// Body of the page's first code block, if that block is notation
    fn first_notation(&self, text: &str) -> Option<String> {
        let blocks = parse_blocks(text, ParseOptions { has_title: true });
        let (file_name, content) = blocks.iter().find_map(|block| block.as_code_block())?;
        if !self.config.is_notation_file(file_name) {
            return None;
        }
        Some(content.trim_end().to_string())
    }

    /// Candidate notations for IME input, best first
    ///
    /// Before `load` completes only the conversion candidate is produced.
    pub fn search(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let key = match convert_to_abc(input) {
            Some(converted) => {
                candidates.push(converted.clone());
                converted
            }
            None => input.to_string(),
        };

        candidates.extend(
            self.entries
                .iter()
                .filter(|entry| entry.title.contains(key.as_str()))
                .map(|entry| entry.notation.clone()),
        );
        log::debug!("search {:?} -> {} candidates", input, candidates.len());
        candidates
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryPages;

    fn twinkle_dictionary() -> NotationDictionary {
        NotationDictionary::from_entries(vec![
            DictionaryEntry::new("twinkle", "CDEC..."),
            DictionaryEntry::new("twinkle2", "EFGE..."),
        ])
    }

    #[test]
    fn test_empty_input() {
        assert!(twinkle_dictionary().search("").is_empty());
        assert!(NotationDictionary::default().search("").is_empty());
    }

    #[test]
    fn test_title_substring_in_load_order() {
        assert_eq!(
            twinkle_dictionary().search("twin"),
            vec!["CDEC...".to_string(), "EFGE...".to_string()]
        );
        assert_eq!(twinkle_dictionary().search("kle2"), vec!["EFGE...".to_string()]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(twinkle_dictionary().search("Twin").is_empty());
    }

    #[test]
    fn test_conversion_is_first_candidate() {
        let dict = NotationDictionary::from_entries(vec![
            DictionaryEntry::new("cde scale", "CDE"),
            DictionaryEntry::new("other", "GAB"),
        ]);
        assert_eq!(dict.search("ドレミ"), vec!["cde".to_string(), "CDE".to_string()]);
    }

    #[test]
    fn test_search_before_load_only_converts() {
        let dict = NotationDictionary::new(ScoreboxConfig::default());
        assert_eq!(dict.search("ド♯"), vec!["^c".to_string()]);
        assert!(dict.search("twin").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dict = NotationDictionary::from_entries(vec![
            DictionaryEntry::new("c", "c"),
            DictionaryEntry::new("cc", "c"),
        ]);
        assert_eq!(dict.search("c"), vec!["c".to_string(), "c".to_string()]);
    }

    #[tokio::test]
    async fn test_load_keeps_only_notation_pages() {
        let source = MemoryPages::new()
            .add("abcdict", "twinkle", "twinkle\ncode:twinkle.abc\n CDEC|\n  \n")
            .add("abcdict", "script", "script\ncode:run.js\n go()\ncode:late.abc\n GABc")
            .add("abcdict", "prose", "prose\nno code here")
            .add("abcdict", "frog", "frog\ncode:frog.abc\n CDEF|EDC2|");

        let mut dict = NotationDictionary::new(ScoreboxConfig::default());
        assert_eq!(dict.load(&source).await.unwrap(), 2);
        assert_eq!(
            dict.entries(),
            &[
                DictionaryEntry::new("twinkle", "CDEC|"),
                DictionaryEntry::new("frog", "CDEF|EDC2|"),
            ]
        );
        assert!(dict.is_loaded());
    }

    #[tokio::test]
    async fn test_load_skips_failing_page_and_is_idempotent() {
        let source = MemoryPages::new()
            .add("abcdict", "good", "good\ncode:good.abc\n ABC")
            .add("abcdict", "bad", "bad\ncode:bad.abc\n DEF")
            .fail("abcdict", "bad", 500, "Internal Server Error");

        let mut dict = NotationDictionary::new(ScoreboxConfig::default());
        assert_eq!(dict.load(&source).await.unwrap(), 1);
        assert_eq!(dict.load(&source).await.unwrap(), 1);
        assert_eq!(source.request_count("list"), 1);
        assert_eq!(dict.search("goo"), vec!["ABC".to_string()]);
    }
}
