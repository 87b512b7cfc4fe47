//! The candidate filter chain.
//!
//! A cleaned wordlist goes through an ordered chain of narrowing stages:
//! dictionary check, character-class filter, case-pattern filters, and
//! exclusion against the external and document glossaries. Every stage only
//! removes words. Disabled stages pass through unchanged.

use crate::capabilities::Capabilities;
use crate::config::ExtractOptions;
use crate::error::Error;
use std::collections::HashSet;

/// Run the filter chain over `words` and return the surviving candidates
/// sorted case-insensitively ascending.
pub fn filter_candidates(
    words: &[String],
    external_glossary: &[String],
    document_glossary: &[String],
    options: &ExtractOptions,
    capabilities: &Capabilities,
) -> Vec<String> {
    let mut words: Vec<String> = words.to_vec();

    if options.dictionary_requested() {
        if let Some(spell) = &capabilities.spell {
            words = apply_dictionary_filter(words, spell.as_ref(), &options.lang);
        }
    }
    if options.chars_only {
        words.retain(|w| is_alpha_or_period(w));
    }
    if options.upper_only {
        words.retain(|w| is_upper_candidate(w));
    }
    if options.inc_camel {
        words.retain(|w| is_camel_candidate(w));
    }
    if !external_glossary.is_empty() {
        let known: HashSet<&str> = external_glossary.iter().map(String::as_str).collect();
        words.retain(|w| !known.contains(w.as_str()));
    }
    if !document_glossary.is_empty() {
        let known: HashSet<&str> = document_glossary.iter().map(String::as_str).collect();
        words.retain(|w| !known.contains(w.as_str()));
    }

    sort_candidates(&mut words);
    words
}

/// Keep only non-empty words the dictionary does not recognize.
///
/// A missing dictionary disables this stage for the run with a warning;
/// the rest of the chain still applies.
fn apply_dictionary_filter(
    words: Vec<String>,
    spell: &dyn crate::capabilities::SpellCheck,
    lang: &str,
) -> Vec<String> {
    let mut kept = Vec::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        if word.is_empty() {
            continue;
        }
        match spell.check(word, lang) {
            Ok(true) => {},
            Ok(false) => kept.push(word.clone()),
            Err(Error::DictionaryNotFound(_)) => {
                log::warn!(
                    "{} dictionary not found; spell-check filter disabled for this run",
                    lang
                );
                return words;
            },
            Err(e) => {
                log::warn!("Spell check failed ({}); keeping remaining words", e);
                kept.extend(words[index..].iter().cloned());
                return kept;
            },
        }
    }
    kept
}

/// Character-class filter: alphabetic characters and literal periods only.
fn is_alpha_or_period(word: &str) -> bool {
    word.chars().all(|c| c.is_alphabetic() || c == '.')
}

/// Upper-only filter: every alphabetic character except the last must be
/// uppercase, and the last character must be uppercase or a literal 's'.
/// The trailing 's' allowance keeps plural acronyms such as "ABCs".
fn is_upper_candidate(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let Some((&last, head)) = chars.split_last() else {
        return false;
    };
    head.iter().all(|c| !c.is_alphabetic() || c.is_uppercase()) && (last.is_uppercase() || last == 's')
}

/// Camel-case filter: longer than one character with an uppercase character
/// after the first position.
fn is_camel_candidate(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some() && chars.any(|c| c.is_uppercase())
}

/// Sort case-insensitively ascending, ties broken by case-sensitive order.
pub fn sort_candidates(words: &mut [String]) {
    words.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}
