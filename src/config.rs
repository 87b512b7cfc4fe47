//! Configuration for glossary-candidate extraction.
//!
//! All pipeline stages consume an immutable [`ExtractOptions`] snapshot.
//! Options are validated once at the boundary; the pipeline itself never
//! re-checks them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Language code that disables the dictionary filter.
pub const LANG_NONE: &str = "NONE";

/// Smallest accepted minimum token length.
pub const MIN_TOKEN_LEN_FLOOR: usize = 1;

/// Largest useful minimum token length (longer would drop most acronyms).
pub const MIN_TOKEN_LEN_CEIL: usize = 8;

/// Extraction and filtering options.
///
/// The defaults mirror the command-line defaults: minimum length 2,
/// British English spell check, all heuristic filters off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Minimum length for a possible glossary entry.
    pub min_len: usize,

    /// Only consider strings that are all uppercase (may end with 's').
    pub upper_only: bool,

    /// Exclude words with embedded numbers or symbols.
    pub chars_only: bool,

    /// Include any word with an uppercase character after the first.
    pub inc_camel: bool,

    /// Search each document for tables that look like glossaries.
    pub table_gloss: bool,

    /// Report glossary entries that never occur in the document.
    pub glossary_unused: bool,

    /// Display results one entry per line instead of wrapped columns.
    pub one_per_line: bool,

    /// Language code to spell check against, or [`LANG_NONE`] to disable.
    pub lang: String,

    /// Use the language-aware tokenizer capability when one is available.
    pub use_lang_tokenizer: bool,

    /// Fail the whole run when any document yields more candidates than this.
    pub max_candidates: Option<usize>,

    /// Fail the whole run when any document leaves more glossary entries
    /// unused than this.
    pub max_unused: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOptions {
    /// Create options with the command-line defaults.
    pub fn new() -> Self {
        Self {
            min_len: 2,
            upper_only: false,
            chars_only: false,
            inc_camel: false,
            table_gloss: false,
            glossary_unused: false,
            one_per_line: false,
            lang: "en_GB".to_string(),
            use_lang_tokenizer: false,
            max_candidates: None,
            max_unused: None,
        }
    }

    /// Set the minimum accepted token length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Keep only all-uppercase candidates (trailing plural 's' allowed).
    pub fn with_upper_only(mut self, enable: bool) -> Self {
        self.upper_only = enable;
        self
    }

    /// Exclude words with embedded numbers or symbols.
    pub fn with_chars_only(mut self, enable: bool) -> Self {
        self.chars_only = enable;
        self
    }

    /// Include camel-case words as candidates.
    pub fn with_inc_camel(mut self, enable: bool) -> Self {
        self.inc_camel = enable;
        self
    }

    /// Enable glossary-table discovery.
    pub fn with_table_gloss(mut self, enable: bool) -> Self {
        self.table_gloss = enable;
        self
    }

    /// Report unused glossary entries.
    pub fn with_glossary_unused(mut self, enable: bool) -> Self {
        self.glossary_unused = enable;
        self
    }

    /// Set the spell-check language ([`LANG_NONE`] disables the filter).
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Prefer the language-aware tokenizer capability.
    pub fn with_lang_tokenizer(mut self, enable: bool) -> Self {
        self.use_lang_tokenizer = enable;
        self
    }

    /// True when the dictionary filter is requested.
    pub fn dictionary_requested(&self) -> bool {
        !self.lang.eq_ignore_ascii_case(LANG_NONE)
    }

    /// Validate option values once at the boundary.
    pub fn validate(&self) -> Result<()> {
        if self.min_len < MIN_TOKEN_LEN_FLOOR {
            return Err(Error::Config(format!(
                "min_len must be at least {}, got {}",
                MIN_TOKEN_LEN_FLOOR, self.min_len
            )));
        }
        if self.min_len > MIN_TOKEN_LEN_CEIL {
            return Err(Error::Config(format!(
                "min_len must be at most {}, got {}",
                MIN_TOKEN_LEN_CEIL, self.min_len
            )));
        }
        if self.lang.trim().is_empty() {
            return Err(Error::Config("lang must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Location of the persisted configuration file.
///
/// Returns `None` on platforms without a user configuration directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gloss_check").join("config.json"))
}

/// Save options as JSON under the user configuration directory.
pub fn save_config(options: &ExtractOptions) -> Result<PathBuf> {
    let path = config_path()
        .ok_or_else(|| Error::Config("no user configuration directory".to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(options)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
    fs::write(&path, json)?;
    log::info!("Saved configuration to {}", path.display());
    Ok(path)
}

/// Load persisted options, falling back to defaults when no config exists
/// or it cannot be parsed.
pub fn load_config() -> ExtractOptions {
    let Some(path) = config_path() else {
        return ExtractOptions::new();
    };
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                ExtractOptions::new()
            },
        },
        Err(_) => ExtractOptions::new(),
    }
}

/// Remove any persisted configuration.
pub fn reset_config() -> Result<()> {
    if let Some(path) = config_path() {
        if path.exists() {
            fs::remove_file(&path)?;
            log::info!("Removed configuration {}", path.display());
        }
    }
    Ok(())
}
