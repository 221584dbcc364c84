pub mod fallback;
pub mod record;

pub use fallback::{fallback_record, FALLBACK_TITLE};
pub use record::TopicRecord;
