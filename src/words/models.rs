//! Data models for the word collection

use serde::{Deserialize, Serialize};

/// A single vocabulary word with its answer history.
///
/// Display fields (definition, pronunciation, synonyms, ...) are not
/// interpreted by the server; they are captured in `extra` and written back
/// verbatim so the word file can carry whatever the frontend wants to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Identifier for the word. Uniqueness is assumed but not enforced;
    /// lookups take the first match.
    pub word: String,
    /// Number of correct answers recorded for this word
    #[serde(default)]
    pub correct: u32,
    /// Number of wrong answers recorded for this word
    #[serde(default)]
    pub wrong: u32,
    /// Any additional fields from the word file, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            correct: 0,
            wrong: 0,
            extra: serde_json::Map::new(),
        }
    }
}
