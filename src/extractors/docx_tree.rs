//! Flat XML tree DOCX extraction.
//!
//! The fallback pathway: streams `word/document.xml` without building the
//! document model. Every paragraph's text (body and table cells alike) and
//! each table's flattened text feed the wordset. No column structure is
//! recovered, so this backend never classifies glossary tables and always
//! returns an empty document glossary.

use super::{read_document_xml, Extraction, WordlistExtractor};
use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use crate::glossary::filter::sort_candidates;
use crate::text::{clean_words, tokenize};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashSet;
use std::path::Path;

/// DOCX extraction through a flat tree walk.
pub struct TreeDocxExtractor;

impl WordlistExtractor for TreeDocxExtractor {
    fn handles(&self, extension: &str) -> bool {
        extension == "docx"
    }

    fn extract(
        &self,
        path: &Path,
        options: &ExtractOptions,
        capabilities: &Capabilities,
    ) -> Result<Extraction> {
        let xml = read_document_xml(path)?;
        let (paragraphs, table_texts) = walk_tree(&xml)?;
        if paragraphs.is_empty() && table_texts.is_empty() {
            return Err(Error::EmptyDocument(path.display().to_string()));
        }

        let mut words = Vec::new();
        let mut seen = HashSet::new();
        for paragraph in &paragraphs {
            for word in clean_words(tokenize(paragraph, options, capabilities), options.min_len) {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
        }
        let mut table_words = 0usize;
        for text in &table_texts {
            for word in clean_words(tokenize(text, options, capabilities), options.min_len) {
                table_words += 1;
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
        }
        log::debug!("{} words from tables", table_words);

        if words.is_empty() {
            return Err(Error::EmptyDocument(path.display().to_string()));
        }
        sort_candidates(&mut words);

        Ok(Extraction {
            words,
            document_glossary: Vec::new(),
        })
    }
}

/// Stream the XML once, collecting per-paragraph text and per-table text.
fn walk_tree(xml: &str) -> Result<(Vec<String>, Vec<String>)> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut table_texts = Vec::new();
    let mut paragraph = String::new();
    let mut table = String::new();
    let mut table_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        table = String::new();
                    }
                },
                b"p" => paragraph = String::new(),
                b"t" => in_text = true,
                _ => {},
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        table_texts.push(std::mem::take(&mut table));
                    }
                },
                b"p" => {
                    if !paragraph.is_empty() {
                        paragraphs.push(std::mem::take(&mut paragraph));
                    }
                    if table_depth > 0 {
                        table.push('\n');
                    }
                },
                b"t" => in_text = false,
                _ => {},
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().unwrap_or_default();
                    paragraph.push_str(&text);
                    if table_depth > 0 {
                        table.push_str(&text);
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok((paragraphs, table_texts))
}
