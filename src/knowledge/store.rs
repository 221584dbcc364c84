// Read-only after construction:
// no mutation
// no "update" methods
// lookups and ordered iteration only

use std::collections::BTreeMap;

use crate::topic::TopicRecord;
use crate::types::identifiers::{KnowledgeBaseVersion, TopicKey};

/// Immutable mapping from topic key to record.
///
/// Entries keep their registration order, which is the order the matcher
/// tries them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub(crate) entries: Vec<(TopicKey, TopicRecord)>,
    pub(crate) index: BTreeMap<TopicKey, usize>,
    pub(crate) version: KnowledgeBaseVersion,
    pub(crate) fallback: TopicRecord,
}

impl KnowledgeBase {
    /// Look a record up by key. Absence is a normal outcome.
    pub fn lookup(&self, key: &str) -> Option<&TopicRecord> {
        let key = TopicKey::new(key).ok()?;
        self.get(&key)
    }

    pub fn get(&self, key: &TopicKey) -> Option<&TopicRecord> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Entries in registration order.
    pub fn topics(&self) -> impl Iterator<Item = (&TopicKey, &TopicRecord)> {
        self.entries.iter().map(|(key, record)| (key, record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &TopicKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> &KnowledgeBaseVersion {
        &self.version
    }

    /// The record returned when no key matches.
    pub fn fallback(&self) -> &TopicRecord {
        &self.fallback
    }
}
