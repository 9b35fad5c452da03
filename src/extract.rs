//! PDF text extraction for Paperlens
//!
//! Thin boundary over the `pdf-extract` crate: given PDF bytes, produce one
//! concatenated plain-text string by walking pages in order. Extraction
//! failures are the only errors in the analysis pipeline that surface to
//! the user as a blocking notice; everything downstream degrades to
//! fallback values instead.

use crate::error::{PaperlensError, Result};
use std::path::Path;

/// Extract the plain text of a PDF document
///
/// Pages are walked in order and recovered text fragments are joined by the
/// extraction backend; the result is returned as a single string with page
/// breaks preserved as form feeds or blank lines.
///
/// # Arguments
///
/// * `bytes` - Raw PDF file contents
///
/// # Errors
///
/// Returns `Extraction` error when the document is unreadable or contains
/// no recoverable text (e.g. a scanned paper without a text layer).
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PaperlensError::Extraction(format!("Failed to read PDF: {}", e)))?;

    if text.trim().is_empty() {
        return Err(PaperlensError::Extraction(
            "Document contains no extractable text".to_string(),
        )
        .into());
    }

    tracing::info!(chars = text.len(), "Extracted document text");
    Ok(text)
}

/// Read a PDF file and extract its text
///
/// Validates the `.pdf` extension up front, then delegates to
/// [`extract_text`].
///
/// # Arguments
///
/// * `path` - Path to the PDF file
///
/// # Errors
///
/// Returns `Extraction` error for non-PDF paths, `Io` for unreadable files,
/// and everything [`extract_text`] can return.
pub fn extract_text_from_file(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PaperlensError::Extraction(format!(
            "Not a PDF file: {}",
            path.display()
        ))
        .into());
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read PDF file");
    extract_text(&bytes)
}

/// File name component of a path, for storing in the analysis record
///
/// Falls back to the full path rendering when the path has no final
/// component.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
