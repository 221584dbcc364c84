use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Name of one knowledge-base entry, e.g. `limit`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicKey(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicKeyError {
    #[error("Topic key must not be empty")]
    Empty,
    #[error("Topic key must not contain whitespace: {0:?}")]
    ContainsWhitespace(String),
    #[error("Topic key must contain only letters and digits: {0:?}")]
    NonAlphanumeric(String),
}

impl TopicKey {
    /// Create a TopicKey, normalizing it to lowercase.
    ///
    /// Keys are compared against segmented tokens, so they must be a single
    /// token themselves: non-empty and made only of alphanumeric characters.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicKeyError> {
        let normalized = normalize_key(raw.as_ref());

        if normalized.is_empty() {
            return Err(TopicKeyError::Empty);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(TopicKeyError::ContainsWhitespace(normalized));
        }
        if !normalized.chars().all(char::is_alphanumeric) {
            return Err(TopicKeyError::NonAlphanumeric(normalized));
        }

        Ok(TopicKey(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize a key according to the same rules tokens go through.
fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl TryFrom<String> for TopicKey {
    type Error = TopicKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TopicKey::new(value)
    }
}

impl From<TopicKey> for String {
    fn from(key: TopicKey) -> Self {
        key.0
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash version of a whole knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBaseVersion(String);

impl KnowledgeBaseVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        KnowledgeBaseVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KnowledgeBaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
