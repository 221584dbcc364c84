pub mod builder;
pub mod builtin;
pub mod error;
pub mod file;
pub mod store;

pub use builder::KnowledgeBaseBuilder;
pub use error::KnowledgeBaseError;
pub use file::{KnowledgeFile, TopicEntry, FORMAT_VERSION};
pub use store::KnowledgeBase;
