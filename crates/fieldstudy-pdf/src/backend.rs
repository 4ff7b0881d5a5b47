use std::path::Path;

use lopdf::Document;

use crate::PdfError;

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-page decoding step; the existence
/// check and page joining live in [`crate::extract`].
pub trait PdfBackend: Send + Sync {
    /// Extract the text of each page of a PDF file, in physical page order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, PdfError>;
}

/// lopdf-based implementation of [`PdfBackend`].
///
/// Pure-Rust decoding. Malformed, truncated, or encrypted-beyond-recovery
/// documents surface as [`PdfError::Parse`]; the document handle is dropped on
/// every exit path.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, PdfError> {
        let document = Document::load(path).map_err(|e| PdfError::Parse(e.to_string()))?;

        let mut pages_text = Vec::new();
        for (page_number, _) in document.get_pages() {
            let text = document
                .extract_text(&[page_number])
                .map_err(|e| PdfError::Parse(e.to_string()))?;
            // lopdf terminates each page's text with '\n'; the page separator
            // is added by the caller.
            pages_text.push(text.trim_matches('\n').to_string());
        }

        Ok(pages_text)
    }
}
