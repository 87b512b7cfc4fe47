//! Injected capabilities for spell checking, tokenization, and legacy
//! document conversion.
//!
//! The pipeline never probes for installed libraries at module level.
//! Optional behavior is expressed as strategy traits bundled in
//! [`Capabilities`]; each one can be replaced by a fake in tests.

use crate::error::{Error, Result};
use spellbook::Dictionary;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Spell-check capability.
///
/// `Ok(true)` means the word is recognized for the language. A missing
/// dictionary surfaces as [`Error::DictionaryNotFound`]; the candidate
/// filter treats that as "filter disabled for this run", not a failure.
pub trait SpellCheck {
    /// Check whether `word` is correctly spelled in `lang`.
    fn check(&self, word: &str, lang: &str) -> Result<bool>;

    /// Language codes with a backing dictionary, if enumerable.
    fn list_languages(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Language-aware word tokenizer capability.
///
/// Returning `None` signals an unsupported language; the caller silently
/// falls back to whitespace splitting.
pub trait WordTokenizer {
    /// Split `text` into words for `lang`, discarding span metadata.
    fn tokenize(&self, text: &str, lang: &str) -> Option<Vec<String>>;
}

/// Legacy document converter capability (e.g. `.doc` to `.docx`).
pub trait DocConverter {
    /// Produce a modern-format copy of `source` at `target`.
    fn convert(&self, source: &Path, target: &Path) -> Result<()>;
}

/// Bundle of optional capabilities threaded through the pipeline.
#[derive(Default)]
pub struct Capabilities {
    /// Spell-check backend, if any.
    pub spell: Option<Box<dyn SpellCheck>>,

    /// Language-aware tokenizer, if any.
    pub tokenizer: Option<Box<dyn WordTokenizer>>,

    /// Legacy format converter, if any.
    pub converter: Option<Box<dyn DocConverter>>,
}

impl Capabilities {
    /// Create an empty capability set (whitespace tokenization only).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the spell-check backend.
    pub fn with_spell(mut self, spell: Box<dyn SpellCheck>) -> Self {
        self.spell = Some(spell);
        self
    }

    /// Set the language-aware tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn WordTokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set the legacy document converter.
    pub fn with_converter(mut self, converter: Box<dyn DocConverter>) -> Self {
        self.converter = Some(converter);
        self
    }
}

/// Spell checker backed by Hunspell `.aff`/`.dic` dictionary pairs.
///
/// Dictionaries are looked up as `<dir>/<lang>.aff` + `<dir>/<lang>.dic`
/// across the configured search directories and cached per language.
pub struct HunspellSpellCheck {
    search_dirs: Vec<PathBuf>,
    cache: Mutex<HashMap<String, Arc<Dictionary>>>,
}

impl HunspellSpellCheck {
    /// Create a checker with the default search directories: `dictionaries`
    /// next to the working directory and the user data directory.
    pub fn new() -> Self {
        let mut search_dirs = vec![
            PathBuf::from("dictionaries"),
            PathBuf::from("resources/dictionaries"),
        ];
        if let Some(data) = dirs::data_dir() {
            search_dirs.push(data.join("gloss_check").join("dictionaries"));
        }
        Self::with_search_dirs(search_dirs)
    }

    /// Create a checker with explicit search directories.
    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn load(&self, lang: &str) -> Result<Arc<Dictionary>> {
        // The cache stays usable even if another thread panicked mid-insert.
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(dict) = cache.get(lang) {
            return Ok(dict.clone());
        }
        for dir in &self.search_dirs {
            let aff_path = dir.join(format!("{}.aff", lang));
            let dic_path = dir.join(format!("{}.dic", lang));
            if !aff_path.exists() || !dic_path.exists() {
                continue;
            }
            let aff = fs::read_to_string(&aff_path)?;
            let dic = fs::read_to_string(&dic_path)?;
            match Dictionary::new(&aff, &dic) {
                Ok(dict) => {
                    let dict = Arc::new(dict);
                    cache.insert(lang.to_string(), dict.clone());
                    return Ok(dict);
                },
                Err(e) => {
                    log::warn!("Skipping malformed dictionary {}: {}", dic_path.display(), e);
                },
            }
        }
        Err(Error::DictionaryNotFound(lang.to_string()))
    }
}

impl Default for HunspellSpellCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellCheck for HunspellSpellCheck {
    fn check(&self, word: &str, lang: &str) -> Result<bool> {
        let dict = self.load(lang)?;
        Ok(dict.check(word))
    }

    fn list_languages(&self) -> Vec<String> {
        let mut langs = Vec::new();
        for dir in &self.search_dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "dic")
                    && path.with_extension("aff").exists()
                {
                    if let Some(stem) = path.file_stem() {
                        let lang = stem.to_string_lossy().to_string();
                        if !langs.contains(&lang) {
                            langs.push(lang);
                        }
                    }
                }
            }
        }
        langs.sort();
        langs
    }
}
