//! Record → post projection
//!
//! Each post variant has a fixed table of (source field, predicate, field
//! kind). Fields missing from the record produce no attribute; fields not in
//! the table are dropped.

use super::classifier::RecordKind;
use super::format::{format_literal, format_timestamp, parse_tags, post_uri};
use super::model::{AttributeValue, Attributes, Post, PostKind};
use super::topics::TopicVocabulary;
use super::{fields, PostError, PostResult, Record};
use crate::rdf::Predicate;

/// How a source field is turned into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Timestamp,
    Tags,
    /// Id of another post, resolved by the linker
    PostRef,
}

const QUESTION_FIELDS: &[(&str, Predicate, FieldKind)] = &[
    (fields::TITLE, Predicate::Title, FieldKind::Text),
    (fields::BODY, Predicate::Content, FieldKind::Text),
    (fields::CREATION_DATE, Predicate::Date, FieldKind::Timestamp),
    (fields::TAGS, Predicate::Topic, FieldKind::Tags),
];

const ANSWER_FIELDS: &[(&str, Predicate, FieldKind)] = &[
    (fields::BODY, Predicate::Content, FieldKind::Text),
    (fields::PARENT_ID, Predicate::HasParent, FieldKind::PostRef),
    (fields::CREATION_DATE, Predicate::Date, FieldKind::Timestamp),
];

/// Builds posts from classified records
#[derive(Debug, Clone)]
pub struct Projector {
    base_uri: String,
    topics: TopicVocabulary,
}

impl Projector {
    pub fn new(base_uri: impl Into<String>, topics: TopicVocabulary) -> Self {
        Self {
            base_uri: base_uri.into(),
            topics,
        }
    }

    pub fn topics(&self) -> &TopicVocabulary {
        &self.topics
    }

    /// Build the post for a record; `Ok(None)` for discarded records.
    pub fn build(&self, kind: RecordKind, record: &Record) -> PostResult<Option<Post>> {
        let table = match kind {
            RecordKind::Question => QUESTION_FIELDS,
            RecordKind::Answer => ANSWER_FIELDS,
            RecordKind::Discard => return Ok(None),
        };

        let id = record
            .get(fields::ID)
            .ok_or(PostError::MissingField(fields::ID))?
            .clone();
        let uri = post_uri(&self.base_uri, &id).map_err(|source| PostError::InvalidUri {
            id: id.clone(),
            source,
        })?;

        let post_kind = match kind {
            RecordKind::Answer => PostKind::Answer {
                parent_id: record
                    .get(fields::PARENT_ID)
                    .ok_or(PostError::MissingField(fields::PARENT_ID))?
                    .clone(),
                best_answer: false,
            },
            _ => PostKind::Question {
                accepted_answer_id: record.get(fields::ACCEPTED_ANSWER_ID).cloned(),
            },
        };

        let attributes = self.project(table, record).map_err(|source| PostError::InvalidUri {
            id: id.clone(),
            source,
        })?;

        Ok(Some(Post::new(id, uri, post_kind, attributes)))
    }

    fn project(
        &self,
        table: &[(&str, Predicate, FieldKind)],
        record: &Record,
    ) -> crate::rdf::RdfResult<Attributes> {
        let mut attributes = Attributes::new();
        for (field, predicate, kind) in table {
            let Some(raw) = record.get(*field) else {
                continue;
            };
            let value = match kind {
                FieldKind::Text => AttributeValue::Literal(format_literal(raw)),
                FieldKind::Timestamp => format_timestamp(raw),
                FieldKind::Tags => {
                    // tags differing only in case resolve to one topic
                    let mut topics: Vec<AttributeValue> = Vec::new();
                    for tag in parse_tags(raw) {
                        let topic = AttributeValue::Resource(self.topics.resolve(&tag)?);
                        if !topics.contains(&topic) {
                            topics.push(topic);
                        }
                    }
                    AttributeValue::List(topics)
                }
                FieldKind::PostRef => AttributeValue::ForeignKey(raw.clone()),
            };
            attributes.insert(*predicate, value);
        }
        attributes.insert(Predicate::HasReply, AttributeValue::List(Vec::new()));
        Ok(attributes)
    }
}
