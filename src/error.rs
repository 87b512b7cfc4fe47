//! Error types for the glossary checker.
//!
//! This module defines all error types that can occur while extracting words
//! from documents and filtering glossary candidates.

/// Result type alias for glossary checker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No extractor is registered for the file's extension.
    #[error("Unsupported document format: '{0}'")]
    UnsupportedFormat(String),

    /// The document contained no extractable text.
    #[error("Document is empty or corrupted: {0}")]
    EmptyDocument(String),

    /// The requested spell-check language has no backing dictionary.
    #[error("No dictionary found for language '{0}'")]
    DictionaryNotFound(String),

    /// The DOCX archive or its content XML could not be decoded.
    #[error("Invalid DOCX: {0}")]
    InvalidDocx(String),

    /// XML parse error inside the document content.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Legacy document conversion failed or no converter is available.
    #[error("Legacy conversion failed: {0}")]
    Conversion(String),

    /// Invalid option value rejected at the configuration boundary.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
