//! Recursive import resolver with a per-instance cache
//!
//! Resolution of a reference:
//! 1. If the source key (`project/page`) is cached, the cached text is
//!    resolved again and returned. Nothing new is cached.
//! 2. Otherwise the page's lines are scanned for the first notation code
//!    declaration, that code block is fetched and resolved recursively,
//!    and the result is cached under the source key.
//!
//! The keys on the current resolution path are tracked; a key that shows
//! up twice is a cyclic import and fails instead of recursing forever.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use super::directive::{directive_reference, has_directive};
use crate::config::ScoreboxConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::models::{ImportReference, ResolutionCacheEntry};
use crate::parse::{extract_notation_blocks, first_notation_code_title};
use crate::source::PageSource;

type ResolveFuture<'a> = Pin<Box<dyn Future<Output = ResolveResult<String>> + 'a>>;

/// Resolved imports in insertion order; entries are never replaced
#[derive(Debug, Default)]
struct ResolutionCache {
    index: HashMap<String, usize>,
    entries: Vec<ResolutionCacheEntry>,
}

impl ResolutionCache {
    fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].resolved_text.as_str())
    }

    fn insert(&mut self, key: String, resolved_text: String) {
        if self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(ResolutionCacheEntry {
            source_key: key,
            resolved_text,
        });
    }
}

/// Inlines `%import:` directives from a [`PageSource`]
///
/// The cache lives as long as the resolver; there is no invalidation.
pub struct ImportResolver<S> {
    source: S,
    config: ScoreboxConfig,
    cache: RefCell<ResolutionCache>,
}

impl<S: PageSource> ImportResolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ScoreboxConfig::default())
    }

    pub fn with_config(source: S, config: ScoreboxConfig) -> Self {
        Self {
            source,
            config,
            cache: RefCell::new(ResolutionCache::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ScoreboxConfig {
        &self.config
    }

    /// Resolve every directive line in `text`
    ///
    /// Text without directives comes back unchanged apart from trailing
    /// newlines. Bare page references are looked up in `current_project`.
    pub async fn resolve(&self, text: &str, current_project: &str) -> ResolveResult<String> {
        let mut path = Vec::new();
        self.resolve_text(text, current_project, &mut path).await
    }

    /// Resolve every notation code block of a page, in page order
    pub async fn resolve_page(&self, page_text: &str, current_project: &str) -> ResolveResult<Vec<String>> {
        let mut resolved = Vec::new();
        for block in extract_notation_blocks(page_text, &self.config.notation_extension) {
            resolved.push(self.resolve(&block, current_project).await?);
        }
        Ok(resolved)
    }

    /// Cached resolution of a source key
    pub fn cached(&self, source_key: &str) -> Option<String> {
        self.cache.borrow().get(source_key).map(str::to_string)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.borrow().entries.len()
    }

    /// Snapshot of the cache in the order sources were first resolved
    pub fn cache_entries(&self) -> Vec<ResolutionCacheEntry> {
        self.cache.borrow().entries.clone()
    }

    fn resolve_text<'a>(
        &'a self,
        text: &'a str,
        current_project: &'a str,
        path: &'a mut Vec<String>,
    ) -> ResolveFuture<'a>
    where
        S: 'a,
    {
        Box::pin(async move {
            if !has_directive(text) {
                return Ok(text.trim_end_matches('\n').to_string());
            }

            let mut lines = Vec::new();
            for line in text.lines() {
                match directive_reference(line) {
                    Some(reference) => {
                        let reference = ImportReference::parse(reference, current_project);
                        lines.push(self.resolve_reference(&reference, path).await?);
                    }
                    None => lines.push(line.to_string()),
                }
            }

            Ok(lines.join("\n").trim_end_matches('\n').to_string())
        })
    }

    async fn resolve_reference(
        &self,
        reference: &ImportReference,
        path: &mut Vec<String>,
    ) -> ResolveResult<String> {
        let key = reference.source_key();
        if path.contains(&key) {
            let mut cycle = path.clone();
            cycle.push(key.clone());
            log::warn!("cyclic import detected: {}", cycle.join(" -> "));
            return Err(ResolveError::CyclicImport { key, path: cycle });
        }

        path.push(key.clone());
        let result = self.load_reference(reference, &key, path).await;
        path.pop();
        result
    }

    async fn load_reference(
        &self,
        reference: &ImportReference,
        key: &str,
        path: &mut Vec<String>,
    ) -> ResolveResult<String> {
        if let Some(cached) = self.cached(key) {
            log::debug!("import cache hit: {}", key);
            return self.resolve_text(&cached, &reference.project, path).await;
        }

        log::info!("Import external notation {}", key);
        let lines = self
            .source
            .page_lines(&reference.project, &reference.page)
            .await?;
        let file_name = first_notation_code_title(&lines, &self.config.notation_extension)
            .ok_or_else(|| ResolveError::MissingCodeBlock {
                project: reference.project.clone(),
                page: reference.page.clone(),
            })?;

        let raw = self
            .source
            .code_block(&reference.project, &reference.page, &file_name)
            .await?;
        let resolved = self.resolve_text(&raw, &reference.project, path).await?;

        self.cache
            .borrow_mut()
            .insert(key.to_string(), resolved.clone());
        Ok(resolved)
    }
}
