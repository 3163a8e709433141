/// Letter groups on a telephone keypad and the digit each group maps to.
const KEYPAD: [(&str, char); 8] = [
    ("abc", '2'),
    ("def", '3'),
    ("ghi", '4'),
    ("jkl", '5'),
    ("mno", '6'),
    ("pqrs", '7'),
    ("tuv", '8'),
    ("wxyz", '9'),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeypadError {
    #[error("can't convert char: {0:?}")]
    InvalidCharacter(char),
}

/// Keypad digit for a single lowercase a-z letter.
pub fn digit(c: char) -> Result<char, KeypadError> {
    KEYPAD
        .iter()
        .find(|(letters, _)| c.is_ascii_lowercase() && letters.contains(c))
        .map(|(_, d)| *d)
        .ok_or(KeypadError::InvalidCharacter(c))
}

/// Encode a word into its keypad code, eg. "cats" -> "2287".
/// Fails on the first character outside a-z.
pub fn encode(word: &str) -> Result<String, KeypadError> {
    word.chars().map(digit).collect()
}

/// Check whether a query is made up of keypad digits 2-9 only.
/// An empty sequence is valid.
pub fn is_valid_digit_sequence(seq: &str) -> bool {
    seq.chars().all(|c| ('2'..='9').contains(&c))
}
