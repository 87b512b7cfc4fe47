//! Shared helpers for integration tests: build minimal DOCX fixtures on
//! disk and small capability fakes.

use gloss_check::capabilities::SpellCheck;
use gloss_check::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Write a minimal DOCX archive whose `word/document.xml` body is `body`.
pub fn write_docx(path: &Path, body: &str) {
    let file = File::create(path).expect("create docx fixture");
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    archive
        .start_file("[Content_Types].xml", options)
        .expect("start content types");
    archive
        .write_all(
            br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#,
        )
        .expect("write content types");

    archive
        .start_file("word/document.xml", options)
        .expect("start document.xml");
    let xml = format!(
        r#"<?xml version="1.0"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WORD_NS, body
    );
    archive.write_all(xml.as_bytes()).expect("write document.xml");
    archive.finish().expect("finish docx fixture");
}

/// One paragraph element.
pub fn para(text: &str) -> String {
    format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", text)
}

/// A table element from row-major cell texts.
pub fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl>");
    for row in rows {
        xml.push_str("<w:tr>");
        for cell in *row {
            xml.push_str("<w:tc>");
            xml.push_str(&para(cell));
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

/// Spell-check fake that recognizes lowercase and title-case words, the way
/// a real dictionary would, while flagging acronyms and camel case.
pub struct SimpleDictionary;

impl SpellCheck for SimpleDictionary {
    fn check(&self, word: &str, _lang: &str) -> Result<bool> {
        let mut chars = word.chars();
        match chars.next() {
            None => Ok(false),
            Some(_) => Ok(chars.all(|c| c.is_lowercase() || !c.is_alphabetic())),
        }
    }
}
