//! Predictive text (T9) suggestions from a plain text corpus.
//!
//! A corpus is normalized into lowercase a-z words which are counted under
//! their telephone keypad code and stored in a prefix trie. A digit sequence
//! query returns the words whose code matches it exactly, ranked by
//! frequency, plus every longer word that starts with one of them.

pub mod autocomplete;
pub mod dictionary;
pub mod importer;
pub mod keypad;
pub mod models;
pub mod suggest;
pub mod tokenizer;

pub use dictionary::DictionaryIndex;
pub use suggest::{Suggestions, SuggestionEngine};
