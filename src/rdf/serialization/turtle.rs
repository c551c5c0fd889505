//! Turtle format reader

use super::{ParseError, ParseResult};
use rio_api::model::{Literal as RioLiteral, Subject, Term};
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};
use std::io::{BufReader, Cursor};

/// Object of a parsed triple, with prefixes expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedObject {
    Iri(String),
    Literal {
        value: String,
        datatype: Option<String>,
    },
    /// Blank nodes and anything else, in N-Triples form
    Other(String),
}

/// Owned triple read back from Turtle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTriple {
    pub subject: String,
    pub predicate: String,
    pub object: ParsedObject,
}

impl ParsedTriple {
    fn from_rio(t: &rio_api::model::Triple<'_>) -> Self {
        let subject = match t.subject {
            Subject::NamedNode(n) => n.iri.to_string(),
            ref other => other.to_string(),
        };
        let object = match t.object {
            Term::NamedNode(n) => ParsedObject::Iri(n.iri.to_string()),
            Term::Literal(RioLiteral::Simple { value }) => ParsedObject::Literal {
                value: value.to_string(),
                datatype: None,
            },
            Term::Literal(RioLiteral::Typed { value, datatype }) => ParsedObject::Literal {
                value: value.to_string(),
                datatype: Some(datatype.iri.to_string()),
            },
            ref other => ParsedObject::Other(other.to_string()),
        };
        Self {
            subject,
            predicate: t.predicate.iri.to_string(),
            object,
        }
    }
}

/// Turtle parser
pub struct TurtleParserWrapper;

impl TurtleParserWrapper {
    /// Parse Turtle string to owned triples
    pub fn parse(input: &str) -> ParseResult<Vec<ParsedTriple>> {
        let cursor = Cursor::new(input);
        let reader = BufReader::new(cursor);
        let mut parser = TurtleParser::new(reader, None);

        let mut triples = Vec::new();

        let res: Result<(), TurtleError> = parser.parse_all(&mut |t| {
            triples.push(ParsedTriple::from_rio(&t));
            Ok(())
        });

        match res {
            Ok(_) => Ok(triples),
            Err(e) => Err(ParseError::Parse(e.to_string())),
        }
    }
}

/// Parse a Turtle document and return how many triples it holds
pub fn check_turtle(input: &str) -> ParseResult<usize> {
    TurtleParserWrapper::parse(input).map(|triples| triples.len())
}
