//! Property tests for the cleaner and the filter-chain ordering guarantee.

use gloss_check::capabilities::Capabilities;
use gloss_check::config::ExtractOptions;
use gloss_check::glossary::filter_candidates;
use gloss_check::text::cleaner::{clean_words, EDGE_STRIP_CHARS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cleaned_tokens_respect_min_length(
        words in prop::collection::vec("[ -~“”‘’]{0,12}", 0..40),
        min_len in 1usize..6,
    ) {
        let cleaned = clean_words(words, min_len);
        for token in &cleaned {
            prop_assert!(token.chars().count() >= min_len, "too short: {:?}", token);
        }
    }

    #[test]
    fn cleaned_tokens_have_stripped_edges(
        words in prop::collection::vec("[ -~“”‘’]{0,12}", 0..40),
    ) {
        let cleaned = clean_words(words, 1);
        for token in &cleaned {
            let first = token.chars().next().unwrap();
            let last = token.chars().last().unwrap();
            prop_assert!(!EDGE_STRIP_CHARS.contains(&first), "leading {:?} in {:?}", first, token);
            prop_assert!(!EDGE_STRIP_CHARS.contains(&last), "trailing {:?} in {:?}", last, token);
        }
    }

    #[test]
    fn cleaned_tokens_are_unique(
        words in prop::collection::vec("[a-zA-Z().]{0,10}", 0..40),
    ) {
        let cleaned = clean_words(words, 1);
        let mut sorted = cleaned.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(cleaned.len(), sorted.len());
    }

    #[test]
    fn filter_output_sorted_case_insensitively(
        words in prop::collection::vec("[a-zA-Z]{1,10}", 0..40),
        upper_only in any::<bool>(),
        inc_camel in any::<bool>(),
    ) {
        let options = ExtractOptions::new()
            .with_lang("NONE")
            .with_upper_only(upper_only)
            .with_inc_camel(inc_camel);
        let result = filter_candidates(&words, &[], &[], &options, &Capabilities::none());
        for pair in result.windows(2) {
            prop_assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
        }
    }

    #[test]
    fn filter_never_adds_words(
        words in prop::collection::vec("[a-zA-Z.]{1,10}", 0..40),
    ) {
        let options = ExtractOptions::new().with_lang("NONE").with_chars_only(true);
        let result = filter_candidates(&words, &[], &[], &options, &Capabilities::none());
        for word in &result {
            prop_assert!(words.contains(word));
        }
        prop_assert!(result.len() <= words.len());
    }
}
