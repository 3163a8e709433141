use std::collections::HashMap;

use serde::Serialize;

use crate::{autocomplete::PrefixTrie, keypad, tokenizer};

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Distinct dictionary words.
    pub words: usize,
    /// Distinct keypad codes.
    pub codes: usize,
    /// Raw corpus tokens seen.
    pub tokens: usize,
    /// Raw tokens that produced no dictionary word.
    pub dropped: usize,
}

/// Corpus derived dictionary: word frequencies keyed by keypad code, and a
/// prefix trie over the same words. Built once, then read-only.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    exact: HashMap<String, HashMap<String, u64>>,
    trie: PrefixTrie,
    tokens: usize,
    dropped: usize,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from corpus lines.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut idx = Self::new();
        for line in lines {
            idx.add_line(line.as_ref());
        }
        idx
    }

    /// Add every token on a corpus line.
    pub fn add_line(&mut self, line: &str) {
        for token in tokenizer::tokenize(line) {
            self.add_token(token);
        }
    }

    /// Normalize a raw token and count each resulting word.
    pub fn add_token(&mut self, token: &str) {
        self.tokens += 1;

        let words = tokenizer::normalize(token);
        if words.is_empty() {
            self.dropped += 1;
            return;
        }

        for word in words {
            let code = match keypad::encode(&word) {
                Ok(c) => c,
                Err(e) => {
                    log::debug!("skipping '{}': {}", word, e);
                    continue;
                }
            };

            self.trie.insert(&word);
            *self
                .exact
                .entry(code)
                .or_default()
                .entry(word)
                .or_insert(0) += 1;
        }
    }

    /// Words whose keypad code is exactly `code`, most frequent first.
    /// Words with equal counts are in no particular order.
    pub fn exact_matches(&self, code: &str) -> Vec<(String, u64)> {
        let Some(words) = self.exact.get(code) else {
            return Vec::new();
        };

        let mut out: Vec<(String, u64)> = words.iter().map(|(w, n)| (w.clone(), *n)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Occurrence count of a single word, 0 if it isn't in the corpus.
    pub fn count(&self, word: &str) -> u64 {
        let Ok(code) = keypad::encode(word) else {
            return 0;
        };
        self.exact
            .get(&code)
            .and_then(|words| words.get(word))
            .copied()
            .unwrap_or(0)
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.exact.values().map(|w| w.len()).sum(),
            codes: self.exact.len(),
            tokens: self.tokens,
            dropped: self.dropped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
