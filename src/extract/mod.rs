//! Document-to-text extraction: text layer first, OCR fallback per page.

mod cache;
mod ocr;

pub use cache::ExtractionCache;

use crate::errors::{StatementParseError, StatementResult};
use tracing::{debug, warn};

const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Turns raw PDF bytes into plain text, one page block per line break, in
/// page order. Owns a content-addressed cache so repeated uploads of the
/// same bytes skip extraction entirely.
#[derive(Debug)]
pub struct TextExtractor {
    cache: ExtractionCache,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: ExtractionCache::new(capacity),
        }
    }

    /// Extract the concatenated text of all pages.
    ///
    /// Pages whose text layer is empty or whitespace-only are rasterized and
    /// run through OCR; a page that fails both contributes an empty string
    /// and never aborts the document. Bytes that aren't a parseable PDF fail
    /// with [`StatementParseError::DocumentFormat`].
    pub fn extract(&mut self, bytes: &[u8]) -> StatementResult<String> {
        if let Some(text) = self.cache.get(bytes) {
            debug!("extraction cache hit");
            return Ok(text.to_string());
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| StatementParseError::DocumentFormat(e.to_string()))?;

        let text = pages
            .iter()
            .enumerate()
            .map(|(index, page)| {
                if !page.trim().is_empty() {
                    return page.clone();
                }
                match ocr::ocr_page(bytes, index) {
                    Ok(ocr_text) => ocr_text,
                    Err(e) => {
                        warn!(page = index + 1, error = %e, "no text layer and OCR failed");
                        String::new()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        self.cache.put(bytes, text.clone());
        Ok(text)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
