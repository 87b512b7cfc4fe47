//! # gloss_check
//!
//! Find the candidates for the glossary in a Word document.
//!
//! The library extracts the wordlist from structured documents (body
//! paragraphs plus tables), runs it through an ordered chain of heuristic
//! filters (dictionary lookup, character classes, case patterns, glossary
//! exclusion), and reports the surviving glossary candidates together with
//! any glossary entries the document never uses. Tables whose first column
//! is mostly candidate-like can be auto-classified as in-document
//! glossaries.
//!
//! ## Architecture
//!
//! - **Extraction backends** implement one [`extractors::WordlistExtractor`]
//!   contract: a structured document-model walk and a flat XML tree walk,
//!   selected per extension through [`extractors::ExtractorRegistry`].
//! - **Capabilities** (spell check, language tokenization, legacy
//!   conversion) are injected strategy objects, never module-level feature
//!   probes; see [`capabilities::Capabilities`].
//! - **Options** are an immutable [`config::ExtractOptions`] snapshot
//!   validated once at the boundary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gloss_check::capabilities::{Capabilities, HunspellSpellCheck};
//! use gloss_check::config::ExtractOptions;
//! use gloss_check::extractors::ExtractorRegistry;
//! use gloss_check::pipeline::get_candidates;
//! use std::path::Path;
//!
//! # fn main() -> gloss_check::error::Result<()> {
//! let options = ExtractOptions::new()
//!     .with_upper_only(true)
//!     .with_chars_only(true)
//!     .with_table_gloss(true);
//! options.validate()?;
//!
//! let capabilities = Capabilities::none().with_spell(Box::new(HunspellSpellCheck::new()));
//! let registry = ExtractorRegistry::standard();
//!
//! let report = get_candidates(Path::new("spec.docx"), &[], &options, &capabilities, &registry)?;
//! for candidate in &report.candidates {
//!     println!("{}", candidate);
//! }
//! # Ok(())
//! # }
//! ```

pub mod capabilities;
pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod glossary;
pub mod output;
pub mod pipeline;
pub mod text;

pub use capabilities::{Capabilities, DocConverter, HunspellSpellCheck, SpellCheck, WordTokenizer};
pub use config::ExtractOptions;
pub use document::{Column, Document, Table};
pub use error::{Error, Result};
pub use extractors::{Extraction, ExtractorRegistry, WordlistExtractor};
pub use glossary::{detect_glossary_tables, filter_candidates, unused_entries, TableGlossary};
pub use pipeline::{get_candidates, load_glossaries, process_documents, BatchOutcome, CandidateReport};
