//! The end-to-end candidate pipeline and batch driver.
//!
//! One document flows extraction -> filter chain -> unused computation,
//! producing a [`CandidateReport`]. Batch runs process each document
//! independently, collect per-file errors, and report them together; only
//! the aggregate outcome decides the process exit.

use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use crate::extractors::ExtractorRegistry;
use crate::glossary::{filter_candidates, unused_entries};
use crate::text::{clean_words, tokenize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything reported for one processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateReport {
    /// The document that was processed.
    pub path: PathBuf,

    /// Number of distinct cleaned words extracted.
    pub word_count: usize,

    /// Glossary candidates, sorted case-insensitively.
    pub candidates: Vec<String>,

    /// Unused glossary entries; empty unless requested by options.
    pub unused: Vec<String>,
}

/// Outcome of a batch run over several documents.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Reports for the documents that processed successfully.
    pub reports: Vec<CandidateReport>,

    /// Per-file failures, in input order.
    pub failures: Vec<(PathBuf, Error)>,
}

impl BatchOutcome {
    /// Whether the run as a whole failed: any per-file error, or any report
    /// exceeding the configured candidate/unused thresholds.
    pub fn is_failure(&self, options: &ExtractOptions) -> bool {
        if !self.failures.is_empty() {
            return true;
        }
        self.reports.iter().any(|report| {
            options
                .max_candidates
                .is_some_and(|limit| report.candidates.len() > limit)
                || options
                    .max_unused
                    .is_some_and(|limit| report.unused.len() > limit)
        })
    }
}

/// Process a single document into a [`CandidateReport`].
pub fn get_candidates(
    path: &Path,
    external_glossary: &[String],
    options: &ExtractOptions,
    capabilities: &Capabilities,
    registry: &ExtractorRegistry,
) -> Result<CandidateReport> {
    let extraction = registry.extract(path, options, capabilities)?;

    let candidates = filter_candidates(
        &extraction.words,
        external_glossary,
        &extraction.document_glossary,
        options,
        capabilities,
    );

    let unused = if options.glossary_unused {
        let source = if options.table_gloss {
            &extraction.document_glossary
        } else {
            external_glossary
        };
        unused_entries(&extraction.words, source)
    } else {
        Vec::new()
    };

    Ok(CandidateReport {
        path: path.to_path_buf(),
        word_count: extraction.words.len(),
        candidates,
        unused,
    })
}

/// Load external glossary files into a normalized token list.
///
/// Each file is tokenized and cleaned, then the combined list goes through
/// the candidate filter with empty glossaries so the exclusion set matches
/// what the documents' candidates look like.
pub fn load_glossaries(
    paths: &[PathBuf],
    options: &ExtractOptions,
    capabilities: &Capabilities,
) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for path in paths {
        log::info!("Reading glossary {}", path.display());
        let text = fs::read_to_string(path)?;
        tokens.extend(tokenize(&text, options, capabilities));
    }
    let cleaned = clean_words(tokens, options.min_len);
    Ok(filter_candidates(&cleaned, &[], &[], options, capabilities))
}

/// Process every document, collecting reports and per-file failures.
///
/// Documents are independent; a failure never aborts the remainder of the
/// batch.
pub fn process_documents(
    paths: &[PathBuf],
    external_glossary: &[String],
    options: &ExtractOptions,
    capabilities: &Capabilities,
) -> BatchOutcome {
    let registry = ExtractorRegistry::standard();
    let mut outcome = BatchOutcome::default();
    for path in paths {
        log::info!("Processing {}", path.display());
        match get_candidates(path, external_glossary, options, capabilities, &registry) {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                outcome.failures.push((path.clone(), e));
            },
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_batch_failure_on_any_error() {
        let outcome = BatchOutcome {
            reports: Vec::new(),
            failures: vec![(PathBuf::from("x.docx"), Error::EmptyDocument("x".into()))],
        };
        assert!(outcome.is_failure(&ExtractOptions::new()));
    }

    #[test]
    fn test_batch_failure_on_candidate_threshold() {
        let outcome = BatchOutcome {
            reports: vec![CandidateReport {
                candidates: words(&["AAA", "BBB"]),
                ..Default::default()
            }],
            failures: Vec::new(),
        };
        let mut options = ExtractOptions::new();
        assert!(!outcome.is_failure(&options));
        options.max_candidates = Some(1);
        assert!(outcome.is_failure(&options));
        options.max_candidates = Some(2);
        assert!(!outcome.is_failure(&options));
    }

    #[test]
    fn test_batch_failure_on_unused_threshold() {
        let outcome = BatchOutcome {
            reports: vec![CandidateReport {
                unused: words(&["OLD", "STALE"]),
                ..Default::default()
            }],
            failures: Vec::new(),
        };
        let mut options = ExtractOptions::new();
        options.max_unused = Some(1);
        assert!(outcome.is_failure(&options));
    }

    #[test]
    fn test_missing_file_is_collected_not_fatal() {
        let options = ExtractOptions::new().with_lang("NONE");
        let outcome = process_documents(
            &[PathBuf::from("/nonexistent/missing.docx")],
            &[],
            &options,
            &Capabilities::none(),
        );
        assert!(outcome.reports.is_empty());
        assert_eq!(outcome.failures.len(), 1);
    }
}
