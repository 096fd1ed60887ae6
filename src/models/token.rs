use serde::{Deserialize, Serialize};

use super::Word;

/// Boundary marker standing in for punctuation
pub const PAUSE_MARKER: &str = "~";
/// Boundary marker reserved for explicit phrase breaks
pub const PHRASE_MARKER: &str = "#";

/// Returns true if the raw token is a boundary marker
pub fn is_boundary(token: &str) -> bool {
    token == PAUSE_MARKER || token == PHRASE_MARKER
}

/// A position in the utterance: either a boundary or a reference into the word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Boundary marker, passed through untouched
    Boundary(String),
    /// Index into [`TokenizedUtterance::words`]
    Word(usize),
}

/// Normalized input split into tagged tokens and the words they reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizedUtterance {
    /// All tokens in input order
    pub tokens: Vec<Token>,
    /// Word tokens in input order
    pub words: Vec<Word>,
}

impl TokenizedUtterance {
    /// Number of boundary tokens
    pub fn boundary_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Boundary(_)))
            .count()
    }

    /// Number of word tokens
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_detection() {
        assert!(is_boundary("~"));
        assert!(is_boundary("#"));
        assert!(!is_boundary("~~"));
        assert!(!is_boundary("dient"));
    }
}
