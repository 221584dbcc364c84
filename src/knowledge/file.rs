//! Versioned JSON externalization of a knowledge base.
//!
//! ```json
//! {
//!   "format_version": "1",
//!   "version": "sha256:…",
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "topics": [ { "key": "limit", "title": "…", "content": "…", "example": "…", "exercise": "…" } ]
//! }
//! ```
//!
//! `topics` is stored in registration order. `version` and `created_at` may be
//! omitted from hand-written files; when `version` is present it must match
//! the content.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::knowledge::builder::KnowledgeBaseBuilder;
use crate::knowledge::error::KnowledgeBaseError;
use crate::knowledge::store::KnowledgeBase;
use crate::topic::TopicRecord;
use crate::types::identifiers::{KnowledgeBaseVersion, TopicKey};

pub const FORMAT_VERSION: &str = "1";

fn default_format_version() -> String {
    FORMAT_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub key: TopicKey,
    #[serde(flatten)]
    pub record: TopicRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    #[serde(default = "default_format_version")]
    pub format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<KnowledgeBaseVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>, // informational only
    pub topics: Vec<TopicEntry>,
}

impl KnowledgeFile {
    pub fn from_knowledge_base(knowledge: &KnowledgeBase) -> Self {
        let topics = knowledge
            .topics()
            .map(|(key, record)| TopicEntry {
                key: key.clone(),
                record: record.clone(),
            })
            .collect();

        Self {
            format_version: default_format_version(),
            version: Some(knowledge.version().clone()),
            created_at: Some(Utc::now()),
            topics,
        }
    }

    /// Register every topic in file order and verify the declared version.
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        if self.format_version != FORMAT_VERSION {
            return Err(KnowledgeBaseError::UnsupportedFormat(self.format_version));
        }

        let mut builder = KnowledgeBaseBuilder::new();
        for entry in self.topics {
            builder.register(entry.key.as_str(), entry.record)?;
        }
        let knowledge = builder.build();

        if let Some(expected) = self.version {
            if &expected != knowledge.version() {
                return Err(KnowledgeBaseError::VersionMismatch {
                    expected,
                    actual: knowledge.version().clone(),
                });
            }
        }

        Ok(knowledge)
    }

    pub fn read(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let f = fs::File::open(path)?;
        let file: KnowledgeFile = serde_json::from_reader(std::io::BufReader::new(f))?;
        Ok(file)
    }

    /// Read, validate and build a knowledge base from `path`.
    pub fn load(path: &Path) -> Result<KnowledgeBase, KnowledgeBaseError> {
        let knowledge = Self::read(path)?.into_knowledge_base()?;

        tracing::info!(
            path = %path.display(),
            topics = knowledge.len(),
            version = %knowledge.version(),
            "Loaded knowledge file"
        );

        Ok(knowledge)
    }

    /// Write the file atomically. Refuses to replace an existing path.
    pub fn write(&self, path: &Path) -> Result<(), KnowledgeBaseError> {
        if path.exists() {
            return Err(KnowledgeBaseError::OutputExists(path.to_path_buf()));
        }

        let temp_path = path.with_extension(format!("tmp.{}", self.temp_suffix()));
        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        let f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;

        fs::rename(&temp_path, path)?;

        tracing::info!(path = %path.display(), topics = self.topics.len(), "Wrote knowledge file");
        Ok(())
    }

    // First 12 hex chars of the content version.
    fn temp_suffix(&self) -> String {
        self.version
            .as_ref()
            .and_then(|v| v.as_str().strip_prefix("sha256:"))
            .and_then(|hex| hex.get(..12))
            .unwrap_or("unversioned")
            .to_string()
    }
}
