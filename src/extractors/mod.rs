//! Wordlist extraction from document files.
//!
//! Extraction backends implement one [`WordlistExtractor`] contract and are
//! selected per file extension through the [`ExtractorRegistry`]. Two DOCX
//! backends exist: the structured document-model walk (default, understands
//! tables and glossary detection) and the flat XML tree walk (no column
//! structure). Legacy `.doc` files go through the converter capability.

pub mod docx_dom;
pub mod docx_tree;
pub mod legacy;

pub use docx_dom::{extract_from_document, DomDocxExtractor};
pub use docx_tree::TreeDocxExtractor;
pub use legacy::LegacyDocExtractor;

use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

/// Everything one extraction call produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Cleaned, deduplicated words sorted case-insensitively.
    pub words: Vec<String>,

    /// Candidate terms from tables classified as glossaries, sorted
    /// case-insensitively. Empty when table detection is off.
    pub document_glossary: Vec<String>,
}

/// A document-to-wordlist extraction backend.
pub trait WordlistExtractor {
    /// True when this backend handles the (lowercased) file extension.
    fn handles(&self, extension: &str) -> bool;

    /// Extract the cleaned wordlist and document glossary from `path`.
    fn extract(
        &self,
        path: &Path,
        options: &ExtractOptions,
        capabilities: &Capabilities,
    ) -> Result<Extraction>;
}

/// Dispatches files to the extraction backend registered for their
/// extension.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn WordlistExtractor>>,
}

impl ExtractorRegistry {
    /// The standard registry: structured DOCX backend plus legacy `.doc`
    /// conversion.
    pub fn standard() -> Self {
        Self {
            extractors: vec![
                Box::new(DomDocxExtractor),
                Box::new(LegacyDocExtractor),
            ],
        }
    }

    /// Registry using the flat XML tree backend for DOCX. No glossary-table
    /// detection; kept for parity checking and as a fallback pathway.
    pub fn flat() -> Self {
        Self {
            extractors: vec![
                Box::new(TreeDocxExtractor),
                Box::new(LegacyDocExtractor),
            ],
        }
    }

    /// Add a backend; earlier registrations win on extension clashes.
    pub fn with_extractor(mut self, extractor: Box<dyn WordlistExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract from `path` with the backend registered for its extension.
    pub fn extract(
        &self,
        path: &Path,
        options: &ExtractOptions,
        capabilities: &Capabilities,
    ) -> Result<Extraction> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.handles(&extension))
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", extension)))?;
        extractor.extract(path, options, capabilities)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Read `word/document.xml` out of a DOCX archive.
///
/// The file handle is scoped to this call and released on every path.
pub(crate) fn read_document_xml(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| Error::InvalidDocx(format!("{}: {}", path.display(), e)))?;
    let mut content = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::InvalidDocx(format!("{}: no word/document.xml ({})", path.display(), e)))?
        .read_to_string(&mut content)
        .map_err(|e| Error::InvalidDocx(format!("{}: {}", path.display(), e)))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_rejected() {
        let registry = ExtractorRegistry::standard();
        let result = registry.extract(
            Path::new("notes.pdf"),
            &ExtractOptions::new(),
            &Capabilities::none(),
        );
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let registry = ExtractorRegistry::standard();
        let result = registry.extract(
            Path::new("README"),
            &ExtractOptions::new(),
            &Capabilities::none(),
        );
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
