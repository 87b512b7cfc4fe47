//! Structured DOCX extraction.
//!
//! DOCX files are ZIP archives holding Open XML; the content lives in
//! `word/document.xml`. This backend walks the XML event stream into a full
//! [`Document`] (body paragraphs plus column-major tables), then derives the
//! wordlist: body text first, table text merged in afterwards, with
//! glossary-classified tables contributing every column except the first.

use super::{read_document_xml, Extraction, WordlistExtractor};
use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::document::{Document, Table};
use crate::error::{Error, Result};
use crate::glossary::detect::{detect_glossary_tables, TableGlossary};
use crate::glossary::filter::sort_candidates;
use crate::text::{clean_words, tokenize};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashSet;
use std::path::Path;

/// DOCX extraction through the structured document model.
pub struct DomDocxExtractor;

impl WordlistExtractor for DomDocxExtractor {
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
        let document = parse_document_xml(&xml)?;
        extract_from_document(&document, &path.display().to_string(), options, capabilities)
    }
}

/// Derive the cleaned wordlist and document glossary from a parsed
/// [`Document`].
///
/// `label` names the document in error messages.
pub fn extract_from_document(
    document: &Document,
    label: &str,
    options: &ExtractOptions,
    capabilities: &Capabilities,
) -> Result<Extraction> {
    if document.is_empty() {
        return Err(Error::EmptyDocument(label.to_string()));
    }

    let body_tokens = tokenize(&document.body_text(), options, capabilities);
    let mut words = clean_words(body_tokens, options.min_len);
    let mut seen: HashSet<String> = words.iter().cloned().collect();

    let glossary = if options.table_gloss {
        detect_glossary_tables(&document.tables, options, capabilities)
    } else {
        TableGlossary::default()
    };

    for (index, table) in document.tables.iter().enumerate() {
        // Glossary tables already contributed their first column as terms;
        // only the remaining columns join the body wordset.
        let from_column = if glossary.contains_table(index) { 1 } else { 0 };
        let text = table
            .cell_texts_from(from_column)
            .collect::<Vec<_>>()
            .join("\n");
        let table_words = clean_words(tokenize(&text, options, capabilities), options.min_len);
        for word in table_words {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }

    if words.is_empty() {
        return Err(Error::EmptyDocument(label.to_string()));
    }
    sort_candidates(&mut words);

    let mut document_glossary = glossary.terms;
    sort_candidates(&mut document_glossary);

    Ok(Extraction {
        words,
        document_glossary,
    })
}

/// Parse `word/document.xml` into the structured document model.
///
/// Paragraph text is the concatenation of its `w:t` runs. Tables are read
/// row-major (`w:tr`/`w:tc`) and transposed; text inside a nested table is
/// folded into the enclosing cell.
pub fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_reader(xml.as_bytes());

    let mut document = Document::default();
    let mut buf = Vec::new();

    let mut table_depth = 0usize;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut paragraph = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        rows = Vec::new();
                    }
                },
                b"tr" => {
                    if table_depth == 1 {
                        row = Vec::new();
                    }
                },
                b"tc" => {
                    if table_depth == 1 {
                        cell = String::new();
                    }
                },
                b"p" => {
                    if table_depth == 0 {
                        paragraph = String::new();
                    }
                },
                b"t" => {
                    in_text = true;
                },
                _ => {},
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        document.tables.push(Table::from_rows(std::mem::take(&mut rows)));
                    }
                },
                b"tr" => {
                    if table_depth == 1 {
                        rows.push(std::mem::take(&mut row));
                    }
                },
                b"tc" => {
                    if table_depth == 1 {
                        row.push(std::mem::take(&mut cell).trim_end().to_string());
                    }
                },
                b"p" => {
                    if table_depth == 0 {
                        document.paragraphs.push(std::mem::take(&mut paragraph));
                    } else {
                        // Paragraph break inside a cell.
                        cell.push('\n');
                    }
                },
                b"t" => {
                    in_text = false;
                },
                _ => {},
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"br" | b"cr" => {
                    if table_depth > 0 {
                        cell.push('\n');
                    } else {
                        paragraph.push('\n');
                    }
                },
                b"tab" => {
                    if table_depth > 0 {
                        cell.push('\t');
                    } else {
                        paragraph.push('\t');
                    }
                },
                _ => {},
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().unwrap_or_default();
                    if table_depth > 0 {
                        cell.push_str(&text);
                    } else {
                        paragraph.push_str(&text);
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str =
        r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn wrap_body(body: &str) -> String {
        format!(r#"<?xml version="1.0"?><w:document {}><w:body>{}</w:body></w:document>"#, NS, body)
    }

    fn para(text: &str) -> String {
        format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", text)
    }

    #[test]
    fn test_parse_paragraphs() {
        let xml = wrap_body(&format!("{}{}", para("Hello world"), para("Second")));
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs, vec!["Hello world", "Second"]);
        assert!(doc.tables.is_empty());
    }

    #[test]
    fn test_runs_concatenate_within_paragraph() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t>lo</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs, vec!["Hello"]);
    }

    #[test]
    fn test_parse_table_columns() {
        let xml = wrap_body(&format!(
            "<w:tbl><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr>\
             <w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr></w:tbl>",
            para("API"),
            para("An interface"),
            para("CPU"),
            para("A processor"),
        ));
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.tables.len(), 1);
        let table = &doc.tables[0];
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].cells, vec!["API", "CPU"]);
        assert_eq!(table.columns[1].cells, vec!["An interface", "A processor"]);
    }

    #[test]
    fn test_cell_paragraphs_do_not_join_body() {
        let xml = wrap_body(&format!(
            "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>",
            para("Body text"),
            para("Cell text"),
        ));
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs, vec!["Body text"]);
        assert_eq!(doc.tables[0].columns[0].cells, vec!["Cell text"]);
    }

    #[test]
    fn test_empty_body() {
        let doc = parse_document_xml(&wrap_body("")).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_extract_empty_document_fails() {
        let result = extract_from_document(
            &Document::default(),
            "empty.docx",
            &ExtractOptions::new(),
            &Capabilities::none(),
        );
        assert!(matches!(result, Err(Error::EmptyDocument(_))));
    }

    #[test]
    fn test_extract_body_words_sorted() {
        let doc = Document {
            paragraphs: vec!["The QUICK Brown FOXES jumped.".to_string()],
            tables: Vec::new(),
        };
        let options = ExtractOptions::new().with_lang("NONE");
        let extraction =
            extract_from_document(&doc, "doc", &options, &Capabilities::none()).unwrap();
        assert_eq!(
            extraction.words,
            vec!["Brown", "FOXES", "jumped", "QUICK", "The"]
        );
        assert!(extraction.document_glossary.is_empty());
    }

    #[test]
    fn test_table_words_merge_without_duplicates() {
        let doc = Document {
            paragraphs: vec!["shared body".to_string()],
            tables: vec![Table::from_rows(vec![vec![
                "shared cell".to_string(),
            ]])],
        };
        let options = ExtractOptions::new().with_lang("NONE");
        let extraction =
            extract_from_document(&doc, "doc", &options, &Capabilities::none()).unwrap();
        assert_eq!(extraction.words, vec!["body", "cell", "shared"]);
    }
}
