//! Text-to-token splitting.
//!
//! The language-aware tokenizer capability usually segments better than a
//! plain whitespace split (it understands hyphenation and apostrophes), but
//! it is optional: when it is absent, disabled, or does not support the
//! requested language, tokenization degrades silently to whitespace
//! splitting. Casing is always preserved; the case-pattern filters run later.

use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;

/// Split `text` into word tokens.
pub fn tokenize(text: &str, options: &ExtractOptions, capabilities: &Capabilities) -> Vec<String> {
    if options.use_lang_tokenizer {
        if let Some(tokenizer) = &capabilities.tokenizer {
            if let Some(words) = tokenizer.tokenize(text, &options.lang) {
                return words;
            }
            log::debug!(
                "No language tokenizer for '{}', falling back to whitespace split",
                options.lang
            );
        }
    }
    text.split_whitespace().map(str::to_string).collect()
}
