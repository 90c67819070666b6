use std::path::Path;

use mupdf::{Document, TextPageFlags};

use precis_core::{ExtractionError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it.
///
/// The extractor concatenates every text line on every page. Summarization
/// only ever sees a truncated prefix of the result, so no effort is spent on
/// layout reconstruction or header/footer filtering.
#[derive(Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| ExtractionError::Open("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| ExtractionError::Open(e.to_string()))?;

        let mut text = String::new();

        for page_result in document
            .pages()
            .map_err(|e| ExtractionError::Extract(e.to_string()))?
        {
            let page = page_result.map_err(|e| ExtractionError::Extract(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| ExtractionError::Extract(e.to_string()))?;

            for block in text_page.blocks() {
                for line in block.lines() {
                    for c in line.chars() {
                        text.push(c.char().unwrap_or('\u{FFFD}'));
                    }
                    text.push('\n');
                }
            }
            text.push('\n');
        }

        Ok(text)
    }
}
