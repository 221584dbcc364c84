pub mod answer;
pub mod identifiers;

pub use answer::{Answer, Question};
pub use identifiers::{KnowledgeBaseVersion, TopicKey, TopicKeyError};
