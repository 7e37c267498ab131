//! Text extraction — turns an uploaded résumé into plain text.
//!
//! Dispatch is by file-name extension only. `Ok(None)` means the format is not
//! supported; `Ok(Some(""))` means a supported document with no text in it.

pub mod docx;
pub mod pdf;

use std::path::Path;

use thiserror::Error;

/// Errors raised while parsing a supported document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),
}

/// The two document formats the analyzer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())?;

        match extension.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(file_name: &str, content: &[u8]) -> Result<Option<String>, ExtractError> {
    let Some(format) = DocumentFormat::from_file_name(file_name) else {
        tracing::debug!("Unsupported upload format: {file_name}");
        return Ok(None);
    };

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(content)?,
        DocumentFormat::Docx => docx::extract_docx_text(content)?,
    };

    tracing::debug!(
        "Extracted {} chars from {file_name} ({format:?})",
        text.chars().count()
    );
    Ok(Some(text))
}
