//! Glossary candidate filtering, glossary-table detection, and unused-entry
//! reporting.

pub mod detect;
pub mod filter;
pub mod unused;

pub use detect::{detect_glossary_tables, TableGlossary, GLOSSARY_DENSITY_PERCENT};
pub use filter::filter_candidates;
pub use unused::unused_entries;
