//! Unused glossary entry reporting.

use std::collections::HashSet;

/// Every entry of `glossary_source` that never occurs in `extracted_words`,
/// in glossary order.
///
/// The source is the document glossary when table detection is active,
/// otherwise the external glossary.
pub fn unused_entries(extracted_words: &[String], glossary_source: &[String]) -> Vec<String> {
    let extracted: HashSet<&str> = extracted_words.iter().map(String::as_str).collect();
    glossary_source
        .iter()
        .filter(|entry| !extracted.contains(entry.as_str()))
        .cloned()
        .collect()
}
