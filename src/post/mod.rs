//! Forum post model
//!
//! Raw dump records come in as flat string maps. This module decides which
//! records are posts, formats their fields as RDF values and builds the
//! typed `Post` entities that the graph linker connects.

pub mod classifier;
pub mod format;
mod model;
mod projection;
pub mod topics;

use indexmap::IndexMap;
use thiserror::Error;

pub use classifier::{classify, RecordKind};
pub use model::{AttributeValue, Attributes, Post, PostHandle, PostKind};
pub use projection::Projector;
pub use topics::TopicVocabulary;

/// One flat record from the source dump, field name → field value
pub type Record = IndexMap<String, String>;

/// Field names used by Stack Exchange post dumps
pub mod fields {
    pub const ID: &str = "Id";
    pub const TITLE: &str = "Title";
    pub const BODY: &str = "Body";
    pub const CREATION_DATE: &str = "CreationDate";
    pub const TAGS: &str = "Tags";
    pub const ANSWER_COUNT: &str = "AnswerCount";
    pub const PARENT_ID: &str = "ParentId";
    pub const ACCEPTED_ANSWER_ID: &str = "AcceptedAnswerId";
}

/// Errors raised while building a post from a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    /// The record has no `Id` field
    #[error("record has no {0} field")]
    MissingField(&'static str),

    /// A URI derived from the record is not a valid IRI
    #[error("post {id}: {source}")]
    InvalidUri {
        id: String,
        #[source]
        source: crate::rdf::RdfError,
    },
}

pub type PostResult<T> = Result<T, PostError>;
