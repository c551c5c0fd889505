//! stackrdf
//!
//! Converts Stack Exchange style forum dumps (questions, answers, tags,
//! timestamps) into an RDF graph written as Turtle, using the SIOC and
//! Dublin Core vocabularies.
//!
//! # Architecture
//!
//! - `source`: reads dumps (XML, JSON) into flat records
//! - `post`: classifies records and projects them into typed posts
//! - `graph`: post arena and the linker (replies, parents, accepted answers)
//! - `render`: one Turtle triple per line for each linked post
//! - `convert`: the driver, writing header and post blocks to a `TextSink`
//! - `rdf`: terms, vocabulary, prefixes and a Turtle reader for checking output
//! - `config`: YAML configuration (URIs, topic vocabulary, limits)
//!
//! ## Example Usage
//!
//! ```rust
//! use stackrdf::{convert, Record};
//!
//! let question: Record = [("Id", "1"), ("Title", "Moby Dick"), ("AnswerCount", "1"), ("AcceptedAnswerId", "2")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! let answer: Record = [("Id", "2"), ("Body", "Call me Ishmael."), ("ParentId", "1")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let mut turtle = String::new();
//! let report = convert(vec![question, answer], &mut turtle).unwrap();
//!
//! assert_eq!(report.posts_written, 2);
//! assert!(turtle.contains("<http://vocab.inf.ed.ac.uk/sws#post2> a tsioc:BestAnswer ."));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod graph;
pub mod post;
pub mod rdf;
pub mod render;
pub mod source;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ConverterConfig};

pub use convert::{
    convert, ConversionError, ConversionReport, ConversionResult, Converter, IoSink,
    SkippedRecord, TextSink,
};

pub use graph::{link, LinkStats, PostGraph};

pub use post::{
    classify, AttributeValue, Post, PostError, PostHandle, PostKind, Projector, Record,
    RecordKind, TopicVocabulary,
};

pub use rdf::{check_turtle, NamespaceManager, PostClass, Predicate, Triple};

pub use render::TripleRenderer;

pub use source::{read_records, SourceError, SourceFormat, SourceResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
