use serde::{Deserialize, Serialize};

/// One knowledge-base entry.
///
/// `content` and `example` may carry markup (math notation, `<br>` line
/// breaks); it is opaque here and preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicRecord {
    pub title: String,
    pub content: String,
    pub example: String,
    pub exercise: String,
}

impl TopicRecord {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        example: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            example: example.into(),
            exercise: exercise.into(),
        }
    }
}
