use std::path::PathBuf;

use thiserror::Error;

use crate::types::identifiers::{KnowledgeBaseVersion, TopicKeyError};

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Invalid topic key: {0}")]
    InvalidTopicKey(#[from] TopicKeyError),
    #[error("Duplicate topic key: {0}")]
    DuplicateTopicKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unsupported knowledge file format version: {0}")]
    UnsupportedFormat(String),
    #[error("Knowledge file version mismatch: file says {expected}, content hashes to {actual}")]
    VersionMismatch {
        expected: KnowledgeBaseVersion,
        actual: KnowledgeBaseVersion,
    },
    #[error("Output path already exists: {0}")]
    OutputExists(PathBuf),
}
