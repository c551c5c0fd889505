//! RDF support for post graphs
//!
//! This module provides the Turtle-level building blocks:
//! - RDF terms and triples in their Turtle token form
//! - The fixed SIOC / Dublin Core vocabulary
//! - Namespace prefixes and the `@prefix` header
//! - A Turtle reader for checking emitted documents
//!
//! # Example
//!
//! ```rust
//! use stackrdf::rdf::{Literal, NamedNode, Predicate, Triple};
//!
//! let subject = NamedNode::new("http://vocab.inf.ed.ac.uk/sws#post1").unwrap();
//! let triple = Triple::new(subject, Predicate::Title, Literal::new_simple_literal("Moby Dick"));
//!
//! assert_eq!(
//!     triple.to_string(),
//!     "<http://vocab.inf.ed.ac.uk/sws#post1> dc:title \"Moby Dick\" ."
//! );
//! ```

mod namespace;
mod serialization;
mod types;
mod vocab;

pub use types::{
    escape_literal, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, Triple,
};

pub use vocab::{Datatype, PostClass, Predicate, DC, SIOC, TSIOC, XSD};

pub use namespace::{Namespace, NamespaceManager, PrefixError, PrefixResult};

pub use serialization::{
    check_turtle, ParseError, ParseResult, ParsedObject, ParsedTriple, TurtleParserWrapper,
};
