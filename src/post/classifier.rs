//! Record classification
//!
//! Dumps carry no explicit post type, so the decision is made on which
//! fields are present: only top-level posts have an answer count, only
//! replies have a parent id.

use super::{fields, Record};

/// What a record turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Question,
    Answer,
    /// Neither question nor answer (wiki excerpts, moderator posts, ...)
    Discard,
}

/// Classify a record by field presence. `AnswerCount` wins over `ParentId`.
pub fn classify(record: &Record) -> RecordKind {
    if record.contains_key(fields::ANSWER_COUNT) {
        RecordKind::Question
    } else if record.contains_key(fields::PARENT_ID) {
        RecordKind::Answer
    } else {
        RecordKind::Discard
    }
}
