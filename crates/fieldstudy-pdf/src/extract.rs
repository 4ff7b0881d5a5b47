use std::path::Path;

use crate::{PdfBackend, PdfError};

/// Extract per-page text via `backend` and join the pages with a newline.
///
/// The existence check runs before any file handle is opened, so a bad path
/// fails with [`PdfError::NotFound`] rather than a decoding error.
pub fn extract_text_via_backend(
    path: &Path,
    backend: &dyn PdfBackend,
) -> Result<String, PdfError> {
    if !path.exists() {
        return Err(PdfError::NotFound {
            path: path.display().to_string(),
        });
    }

    let pages = backend.extract_pages(path)?;
    tracing::debug!(path = %path.display(), pages = pages.len(), "extracted PDF text");

    Ok(pages.join("\n"))
}
