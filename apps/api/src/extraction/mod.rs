//! Text extraction — turns an uploaded resume file into plain text for the matcher.
//!
//! Format is chosen from the file extension only. Extraction is CPU-bound: async
//! callers must run it inside `tokio::task::spawn_blocking`.

pub mod docx;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Word document extraction failed: {0}")]
    Word(String),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// `.docx`, and `.doc` on a best-effort basis (only zip-based files will parse).
    Word,
    PlainText,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" | "doc" => Some(DocumentKind::Word),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::PlainText => "text/plain",
        }
    }
}

pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        DocumentKind::Word => docx::extract_docx_text(bytes),
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Like [`extract_text`], but an unreadable file yields empty text instead of an error.
/// The matcher then reports every skill as missing.
pub fn extract_text_lenient(kind: DocumentKind, bytes: &[u8]) -> String {
    match extract_text(kind, bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume text extraction failed, continuing with empty text: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension_is_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("cv.Docx"), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::from_filename("cv.doc"), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::from_filename("my.cv.txt"), Some(DocumentKind::PlainText));
    }

    #[test]
    fn test_unsupported_or_missing_extension() {
        assert_eq!(DocumentKind::from_filename("cv.odt"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_plain_text_is_lossy_utf8() {
        let text = extract_text(DocumentKind::PlainText, b"Rust \xff and SQL").unwrap();
        assert!(text.starts_with("Rust "));
        assert!(text.ends_with(" and SQL"));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let result = extract_text(DocumentKind::Pdf, b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_lenient_extraction_falls_back_to_empty() {
        assert_eq!(extract_text_lenient(DocumentKind::Word, b"not a zip"), "");
        assert_eq!(
            extract_text_lenient(DocumentKind::PlainText, b"python"),
            "python"
        );
    }
}
