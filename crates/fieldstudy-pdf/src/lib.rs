use std::path::Path;

use thiserror::Error;

pub mod backend;
pub mod extract;

pub use backend::{LopdfBackend, PdfBackend};

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF not found: {path}")]
    NotFound { path: String },
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the text of every page of a PDF, one page per newline-separated
/// segment, in physical page order.
///
/// A page with no extractable text (e.g. a scanned image without an embedded
/// text layer) contributes an empty segment. Fails with [`PdfError::NotFound`]
/// before any I/O when the path does not exist; decoding failures are surfaced
/// unchanged as [`PdfError::Parse`].
pub fn extract_pdf_text(path: impl AsRef<Path>) -> Result<String, PdfError> {
    extract::extract_text_via_backend(path.as_ref(), &LopdfBackend::new())
}

/// Extract page text using the given backend for PDF decoding.
pub fn extract_pdf_text_with(path: &Path, backend: &dyn PdfBackend) -> Result<String, PdfError> {
    extract::extract_text_via_backend(path, backend)
}
