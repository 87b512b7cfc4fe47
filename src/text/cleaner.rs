//! Token cleanup.
//!
//! Strips quote and punctuation artifacts from token edges, drops tokens
//! that are too short, and deduplicates. Interior characters are never
//! touched: "U.S." keeps its embedded periods, only the trailing one goes.

use std::collections::HashSet;

/// Characters stripped from the leading and trailing edges of each token.
///
/// Curly and straight quotes, comma, period, slash, colon, semicolon,
/// parentheses, brackets, braces, and stray spaces.
pub const EDGE_STRIP_CHARS: &[char] = &[
    '\u{201c}', '\u{201d}', ',', '\'', '"', '\u{2018}', ' ', '\u{2019}', '.', '/', ':', ';', '(',
    ')', '[', ']', '{', '}',
];

/// Clean a wordlist: strip token edges, drop tokens shorter than `min_len`
/// characters, and deduplicate (first occurrence wins).
///
/// Ordering beyond "first seen" is not guaranteed by this stage; callers
/// that need a sorted list sort afterwards.
pub fn clean_words<I, S>(words: I, min_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for word in words {
        let stripped = word.as_ref().trim_matches(EDGE_STRIP_CHARS);
        if stripped.chars().count() < min_len {
            continue;
        }
        if seen.insert(stripped.to_string()) {
            cleaned.push(stripped.to_string());
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_boundary_punctuation() {
        let words = clean_words(["(hello)", "\u{201c}world\u{201d},", "[ok];"], 1);
        assert_eq!(words, vec!["hello", "world", "ok"]);
    }

    #[test]
    fn test_interior_characters_untouched() {
        let words = clean_words(["U.S.", "e.g.)"], 2);
        assert_eq!(words, vec!["U.S", "e.g"]);
    }

    #[test]
    fn test_min_length_applies_after_strip() {
        // "(a)" strips to one character, below the minimum of 2.
        let words = clean_words(["(a)", "ab."], 2);
        assert_eq!(words, vec!["ab"]);
    }

    #[test]
    fn test_deduplicates() {
        let words = clean_words(["term", "(term)", "term,"], 2);
        assert_eq!(words, vec!["term"]);
    }

    #[test]
    fn test_empty_after_strip_dropped() {
        let words = clean_words(["...", "\"\"", "::"], 1);
        assert!(words.is_empty());
    }
}
