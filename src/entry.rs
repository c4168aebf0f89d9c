use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single word stored in a word file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new<W, D>(word: W, description: D, tags: Vec<String>) -> Self
    where
        W: Into<String>,
        D: Into<String>,
    {
        Self {
            word: word.into(),
            description: description.into(),
            tags,
            added_at: None,
        }
    }

    /// Mark the entry as added right now.
    pub fn stamped(mut self) -> Self {
        self.added_at = Some(Utc::now());
        self
    }

    /// Case-insensitive substring match against the word and every tag.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.word.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Split a comma-separated tag line, trimming each tag.
///
/// A blank line carries no tags. Empty tags between commas are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
