use std::collections::BTreeMap;

use crate::knowledge::error::KnowledgeBaseError;
use crate::knowledge::store::KnowledgeBase;
use crate::topic::{fallback_record, TopicRecord};
use crate::types::identifiers::{KnowledgeBaseVersion, TopicKey};

const FIELD_SEPARATOR: u8 = 0x1f;
const RECORD_SEPARATOR: u8 = 0x1e;

/// Collects topics in registration order, then freezes them into a
/// [`KnowledgeBase`].
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    entries: Vec<(TopicKey, TopicRecord)>,
    index: BTreeMap<TopicKey, usize>,
}

impl KnowledgeBaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        key: impl AsRef<str>,
        record: TopicRecord,
    ) -> Result<&mut Self, KnowledgeBaseError> {
        let key = TopicKey::new(key)?;

        if self.index.contains_key(&key) {
            return Err(KnowledgeBaseError::DuplicateTopicKey(key.as_str().to_string()));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, record));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> KnowledgeBase {
        let version = compute_version(&self.entries);
        let fallback = fallback_record(self.entries.iter().map(|(key, _)| key));

        tracing::debug!(
            topics = self.entries.len(),
            version = %version,
            "Built knowledge base"
        );

        KnowledgeBase {
            entries: self.entries,
            index: self.index,
            version,
            fallback,
        }
    }
}

/// Hash every field of every entry, in registration order.
///
/// Reordering topics changes the version because it changes which key wins
/// a match.
fn compute_version(entries: &[(TopicKey, TopicRecord)]) -> KnowledgeBaseVersion {
    let mut canonical = Vec::new();

    for (key, record) in entries {
        for field in [
            key.as_str(),
            record.title.as_str(),
            record.content.as_str(),
            record.example.as_str(),
            record.exercise.as_str(),
        ] {
            canonical.extend_from_slice(field.as_bytes());
            canonical.push(FIELD_SEPARATOR);
        }
        canonical.push(RECORD_SEPARATOR);
    }

    KnowledgeBaseVersion::from_content(&canonical)
}
