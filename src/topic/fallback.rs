use crate::topic::TopicRecord;
use crate::types::identifiers::TopicKey;

pub const FALLBACK_TITLE: &str = "No matching topic found";

/// Build the record returned when no topic key matches.
///
/// Example and exercise are always empty; the content names every
/// available key in registration order.
pub fn fallback_record<'a>(keys: impl IntoIterator<Item = &'a TopicKey>) -> TopicRecord {
    let keys: Vec<&str> = keys.into_iter().map(TopicKey::as_str).collect();

    let content = match keys.first() {
        None => "The knowledge base has no topics yet.".to_string(),
        Some(first) => format!(
            "Try asking about one of these core topics: {} (for example: \"What is a {first}?\")",
            keys.join(", ")
        ),
    };

    TopicRecord::new(FALLBACK_TITLE, content, "", "")
}
