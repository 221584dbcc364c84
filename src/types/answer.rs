use serde::{Deserialize, Serialize};

use crate::matching::Segmenter;
use crate::topic::TopicRecord;
use crate::types::identifiers::TopicKey;

/// A segmented question.
///
/// An absent question is treated exactly like an empty one: no tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub raw: String,
    pub tokens: Vec<String>,
}

impl Question {
    pub fn new<S: Segmenter + ?Sized>(raw: Option<&str>, segmenter: &S) -> Self {
        let raw = raw.unwrap_or_default().to_string();
        let tokens = segmenter.segment(&raw);

        Self { raw, tokens }
    }

    pub fn contains(&self, key: &TopicKey) -> bool {
        self.tokens.iter().any(|token| token == key.as_str())
    }
}

/// The outcome of answering one question, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    /// `None` when no topic matched and the fallback record was returned.
    pub topic: Option<TopicKey>,
    pub record: TopicRecord,
}

impl Answer {
    pub fn is_fallback(&self) -> bool {
        self.topic.is_none()
    }
}
