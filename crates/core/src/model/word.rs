use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single vocabulary entry in the word bank.
///
/// Field names serialize in camelCase so persisted banks keep the
/// `wordType` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub word_type: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub audio: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word cannot be empty")]
    EmptyWord,
    #[error("duplicate word in bank: {0}")]
    DuplicateWord(String),
}

impl WordEntry {
    /// Check the entry can be used as a word bank key.
    ///
    /// # Errors
    ///
    /// Returns `WordError::EmptyWord` if the word is blank.
    pub fn validate(&self) -> Result<(), WordError> {
        if self.word.trim().is_empty() {
            return Err(WordError::EmptyWord);
        }
        Ok(())
    }
}

/// Validate a whole bank: every word non-empty and unique.
///
/// # Errors
///
/// Returns the first `WordError` found, in list order.
pub fn validate_bank(entries: &[WordEntry]) -> Result<(), WordError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        entry.validate()?;
        if !seen.insert(entry.word.as_str()) {
            return Err(WordError::DuplicateWord(entry.word.clone()));
        }
    }
    Ok(())
}

/// Entries whose topic equals `topic` exactly (case-sensitive), in order.
#[must_use]
pub fn filter_by_topic(entries: &[WordEntry], topic: &str) -> Vec<WordEntry> {
    entries
        .iter()
        .filter(|entry| entry.topic == topic)
        .cloned()
        .collect()
}

/// Distinct non-empty topics in order of first appearance.
#[must_use]
pub fn distinct_topics(entries: &[WordEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| !entry.topic.is_empty())
        .filter(|entry| seen.insert(entry.topic.as_str()))
        .map(|entry| entry.topic.clone())
        .collect()
}
