//! Glossary-table discovery.
//!
//! A table is assumed to be a glossary or definitions table when most of its
//! first-column entries independently look like glossary candidates. This is
//! a density heuristic, not a structural one; false positives and negatives
//! are an accepted trade-off.

use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::document::Table;
use crate::glossary::filter::filter_candidates;
use crate::text::{clean_words, tokenize};
use std::collections::BTreeSet;

/// Candidate density (percent of column-0 words) a table must exceed to be
/// classified as a glossary. Tunable; chosen empirically.
pub const GLOSSARY_DENSITY_PERCENT: f64 = 50.0;

/// Result of scanning a document's tables for glossaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGlossary {
    /// Candidate terms collected from the first columns of classified
    /// tables, in table order.
    pub terms: Vec<String>,

    /// Indices of tables classified as glossaries.
    pub table_indices: BTreeSet<usize>,
}

impl TableGlossary {
    /// True when `table_index` was classified as a glossary table.
    pub fn contains_table(&self, table_index: usize) -> bool {
        self.table_indices.contains(&table_index)
    }
}

/// Inspect each table's first column and classify tables whose column-0
/// candidate density exceeds [`GLOSSARY_DENSITY_PERCENT`].
///
/// The filter chain runs with empty glossaries here: the point is to judge
/// how candidate-like the column is on its own.
pub fn detect_glossary_tables(
    tables: &[Table],
    options: &ExtractOptions,
    capabilities: &Capabilities,
) -> TableGlossary {
    let mut result = TableGlossary::default();
    for (index, table) in tables.iter().enumerate() {
        let Some(first_column) = table.columns.first() else {
            continue;
        };
        let mut tokens = Vec::new();
        for cell in &first_column.cells {
            tokens.extend(tokenize(cell, options, capabilities));
        }
        let col_words = clean_words(tokens, options.min_len);
        if col_words.is_empty() {
            continue;
        }
        let candidates = filter_candidates(&col_words, &[], &[], options, capabilities);
        let density = candidates.len() as f64 * 100.0 / col_words.len() as f64;
        if density > GLOSSARY_DENSITY_PERCENT {
            log::info!(
                "Table {} looks like a glossary: {} of {} column words are candidates",
                index,
                candidates.len(),
                col_words.len()
            );
            result.table_indices.insert(index);
            result.terms.extend(candidates);
        }
    }
    result
}
