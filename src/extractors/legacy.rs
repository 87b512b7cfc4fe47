//! Legacy `.doc` extraction through the converter capability.
//!
//! The converter produces a temporary `.docx` copy which then goes through
//! the structured backend. The temporary directory is dropped on every exit
//! path, so the converted file never outlives the call.

use super::{DomDocxExtractor, Extraction, WordlistExtractor};
use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use std::path::Path;

/// `.doc` extraction via conversion to a temporary `.docx`.
pub struct LegacyDocExtractor;

impl WordlistExtractor for LegacyDocExtractor {
    fn handles(&self, extension: &str) -> bool {
        extension == "doc"
    }

    fn extract(
        &self,
        path: &Path,
        options: &ExtractOptions,
        capabilities: &Capabilities,
    ) -> Result<Extraction> {
        let Some(converter) = &capabilities.converter else {
            return Err(Error::Conversion(format!(
                "no .doc converter available for {}",
                path.display()
            )));
        };

        log::info!("Converting {} to a temporary .docx", path.display());
        let temp_dir = tempfile::tempdir()?;
        let temp_path = temp_dir.path().join("gloss_check_temp.docx");
        converter.convert(path, &temp_path)?;

        let result = DomDocxExtractor.extract(&temp_path, options, capabilities);
        // temp_dir drops here, removing the converted file whatever happened.
        result.map_err(|e| match e {
            Error::EmptyDocument(_) => Error::EmptyDocument(path.display().to_string()),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::DocConverter;
    use std::fs;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Converter that just copies the source file.
    struct CopyConverter {
        called: Arc<AtomicBool>,
    }

    impl DocConverter for CopyConverter {
        fn convert(&self, source: &Path, target: &Path) -> Result<()> {
            self.called.store(true, Ordering::SeqCst);
            fs::copy(source, target)?;
            Ok(())
        }
    }

    #[test]
    fn test_missing_converter_is_conversion_error() {
        let result = LegacyDocExtractor.extract(
            Path::new("old.doc"),
            &ExtractOptions::new(),
            &Capabilities::none(),
        );
        assert!(matches!(result, Err(Error::Conversion(_))));
    }

    #[test]
    fn test_converter_invoked_and_temp_removed() {
        let called = Arc::new(AtomicBool::new(false));
        let caps = Capabilities::none().with_converter(Box::new(CopyConverter {
            called: called.clone(),
        }));

        // Source is not a real archive; extraction fails after conversion,
        // which is exactly the path where cleanup must still happen.
        let source = tempfile::NamedTempFile::new().unwrap();
        fs::write(source.path(), b"not a docx").unwrap();
        let doc_path = source.path().with_extension("doc");
        fs::copy(source.path(), &doc_path).unwrap();

        let result =
            LegacyDocExtractor.extract(&doc_path, &ExtractOptions::new(), &Capabilities::none());
        assert!(result.is_err());
        assert!(!called.load(Ordering::SeqCst));

        let result = LegacyDocExtractor.extract(&doc_path, &ExtractOptions::new(), &caps);
        assert!(matches!(result, Err(Error::InvalidDocx(_))));
        assert!(called.load(Ordering::SeqCst));

        fs::remove_file(&doc_path).ok();
    }
}
