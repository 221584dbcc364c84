pub mod segment;

use std::sync::Arc;

use crate::knowledge::{builtin, KnowledgeBase};
use crate::topic::TopicRecord;
use crate::types::answer::{Answer, Question};
use crate::types::identifiers::TopicKey;
pub use segment::{DictionarySegmenter, Segmenter, WordSegmenter};

/// Maps a free-text question to a topic record.
///
/// Matching is first-match-wins over the knowledge base's registration
/// order: when a question mentions several topics, the one registered
/// earliest is returned regardless of where it appears in the text.
/// Matching never fails; no match yields the fallback record.
#[derive(Debug, Clone)]
pub struct Matcher<S = WordSegmenter> {
    knowledge: Arc<KnowledgeBase>,
    segmenter: S,
}

impl Default for Matcher<WordSegmenter> {
    fn default() -> Self {
        Self {
            knowledge: Arc::new(builtin::calculus()),
            segmenter: WordSegmenter,
        }
    }
}

impl<S> Matcher<S>
where
    S: Segmenter,
{
    pub fn new(knowledge: Arc<KnowledgeBase>, segmenter: S) -> Self {
        Self {
            knowledge,
            segmenter,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    pub fn question(&self, raw: Option<&str>) -> Question {
        Question::new(raw, &self.segmenter)
    }

    /// The first registered key present among the question's tokens.
    pub fn match_topic(&self, question: &Question) -> Option<&TopicKey> {
        self.knowledge.keys().find(|key| question.contains(key))
    }

    /// Answer a question with its topic record, or the fallback record.
    pub fn answer(&self, question: Option<&str>) -> &TopicRecord {
        let question = self.question(question);
        match self.match_topic(&question) {
            Some(key) => self.record_for(key),
            None => self.knowledge.fallback(),
        }
    }

    /// Like [`Matcher::answer`], also reporting which topic matched.
    pub fn resolve(&self, question: Option<&str>) -> Answer {
        let question = self.question(question);
        let topic = self.match_topic(&question).cloned();

        let record = match &topic {
            Some(key) => {
                tracing::debug!(topic = %key, tokens = question.tokens.len(), "Matched topic");
                self.record_for(key).clone()
            }
            None => {
                tracing::debug!(tokens = question.tokens.len(), "No topic matched, using fallback");
                self.knowledge.fallback().clone()
            }
        };

        Answer {
            question: question.raw,
            topic,
            record,
        }
    }

    fn record_for(&self, key: &TopicKey) -> &TopicRecord {
        // Keys come from the knowledge base itself.
        self.knowledge.get(key).unwrap_or_else(|| self.knowledge.fallback())
    }
}
