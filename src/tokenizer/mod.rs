use std::collections::HashSet;

use crate::keypad;

/// Punctuation stripped from anywhere in a token.
const ESCAPE_CHARS: [&str; 15] = [
    "'", "\"", "_", ".", ",", "?", ":", "!", ";", "(", ")", "[", "]", "{", "}",
];

/// Chapter numbering stripped from anywhere in a token, in this order.
/// This is naive substring removal and also eats letters out of ordinary
/// words, eg. "vivid" -> "id".
const ROMAN_NUMERALS: [&str; 11] = [
    "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii",
];

/// Two character suffixes stripped from the end of a token.
const SHORT_SUFFIXES: [&str; 3] = ["'s", "'d", "'m"];

/// Three character suffixes. They're compared against the last two characters
/// of the token, so they never match and nothing is stripped.
const LONG_SUFFIXES: [&str; 2] = ["'ve", "'ll"];

/// Split a corpus line into raw whitespace delimited tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Normalize a raw corpus token into zero or more dictionary words.
/// Hyphenated tokens yield each of their parts as independent words.
/// Tokens that can't be keypad encoded after cleanup yield nothing.
pub fn normalize(token: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    if token.is_empty() {
        return out;
    }

    let mut s = token.to_lowercase();

    // Drop negative contractions (don't, can't). This is a substring test.
    if s.contains("'t") {
        return out;
    }

    if s.len() > 1 {
        if let Some(tail) = s.get(s.len() - 2..) {
            if SHORT_SUFFIXES.contains(&tail) {
                s.truncate(s.len() - 2);
            }
        }
    }

    if s.len() > 2 {
        if let Some(tail) = s.get(s.len() - 2..) {
            if LONG_SUFFIXES.contains(&tail) {
                s.truncate(s.len() - 3);
            }
        }
    }

    for c in ESCAPE_CHARS {
        s = s.replace(c, "");
    }
    for n in ROMAN_NUMERALS {
        s = s.replace(n, "");
    }

    if s.contains('-') {
        for part in s.split('-').filter(|p| !p.is_empty()) {
            out.extend(normalize(part));
        }
        return out;
    }

    match keypad::encode(&s) {
        Ok(_) if !s.is_empty() => {
            out.insert(s);
        }
        Ok(_) => {}
        Err(e) => log::debug!("dropping token '{}': {}", token, e),
    }

    out
}
