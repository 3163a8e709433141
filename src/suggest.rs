use std::collections::HashSet;

use serde::Serialize;

use crate::dictionary::DictionaryIndex;

/// An exact match for a digit sequence and its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub word: String,
    pub count: u64,
}

/// Result of a query. `exact` is ranked by frequency, `completions` is a set
/// of longer words starting with any exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub exact: Vec<Match>,
    pub completions: HashSet<String>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.completions.is_empty()
    }

    /// Completions in lexical order, for stable output.
    pub fn sorted_completions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.completions.iter().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

/// Answers digit sequence queries against a fully built index.
pub struct SuggestionEngine {
    index: DictionaryIndex,
}

impl SuggestionEngine {
    pub fn new(index: DictionaryIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Suggest words for a digit sequence. The sequence is expected to be
    /// validated with `keypad::is_valid_digit_sequence` by the caller.
    pub fn suggest(&self, digits: &str) -> Suggestions {
        if digits.is_empty() {
            return Suggestions::default();
        }

        let exact: Vec<Match> = self
            .index
            .exact_matches(digits)
            .into_iter()
            .map(|(word, count)| Match { word, count })
            .collect();

        let trie = self.index.trie();
        let mut completions = HashSet::new();
        for m in &exact {
            if trie.contains_path(&m.word) {
                completions.extend(trie.completions(&m.word));
            }
        }

        Suggestions { exact, completions }
    }
}
