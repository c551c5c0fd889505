//! RDF serialization support
//!
//! Output is written by the triple renderer; this module reads Turtle back so
//! the emitted documents can be checked against a real parser.

mod turtle;

use thiserror::Error;

pub use turtle::{check_turtle, ParsedObject, ParsedTriple, TurtleParserWrapper};

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
