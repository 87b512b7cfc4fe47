//! Tokenization and word cleaning.

pub mod cleaner;
pub mod tokenizer;

pub use cleaner::clean_words;
pub use tokenizer::tokenize;
