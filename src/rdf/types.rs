//! RDF term definitions
//!
//! Terms here are already in their Turtle token form: named nodes print as
//! `<iri>`, literals carry their quoted and escaped lexical form, and vocabulary
//! terms print as prefixed names.

use super::vocab::{Datatype, PostClass, Predicate};
use oxrdf::NamedNode as OxNamedNode;
use std::fmt;
use thiserror::Error;

/// RDF errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// Invalid IRI
    #[error("Invalid IRI {iri}: {reason}")]
    InvalidIri { iri: String, reason: String },
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node, validating the IRI
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        let iri = iri.into();
        OxNamedNode::new(iri.clone())
            .map(Self)
            .map_err(|e| RdfError::InvalidIri {
                iri,
                reason: e.to_string(),
            })
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

/// Escape raw text into a Turtle short string literal.
///
/// Backslashes and double quotes are escaped, line breaks are dropped.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' => {}
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// RDF literal in Turtle string syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(String);

impl Literal {
    /// Create a literal from raw text, escaping it
    pub fn new_simple_literal(raw: &str) -> Self {
        Self(escape_literal(raw))
    }

    /// The quoted, escaped token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lexical value between the quotes, still escaped
    pub fn lexical(&self) -> &str {
        &self.0[1..self.0.len() - 1]
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Triple predicate position: `a` (rdf:type) or a vocabulary property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfPredicate {
    /// rdf:type, written with the Turtle `a` keyword
    Type,
    Property(Predicate),
}

impl fmt::Display for RdfPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfPredicate::Type => f.write_str("a"),
            RdfPredicate::Property(p) => write!(f, "{}", p),
        }
    }
}

impl From<Predicate> for RdfPredicate {
    fn from(p: Predicate) -> Self {
        RdfPredicate::Property(p)
    }
}

/// RDF object (NamedNode, Literal, typed Literal or vocabulary class)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    NamedNode(NamedNode),
    Literal(Literal),
    TypedLiteral(Literal, Datatype),
    Class(PostClass),
}

impl RdfObject {
    /// Check if this is any kind of literal
    pub fn is_literal(&self) -> bool {
        matches!(self, RdfObject::Literal(_) | RdfObject::TypedLiteral(..))
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfObject::NamedNode(n) => write!(f, "{}", n),
            RdfObject::Literal(l) => write!(f, "{}", l),
            RdfObject::TypedLiteral(l, dt) => write!(f, "{}^^{}", l, dt),
            RdfObject::Class(c) => write!(f, "{}", c),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(lit: Literal) -> Self {
        RdfObject::Literal(lit)
    }
}

impl From<PostClass> for RdfObject {
    fn from(class: PostClass) -> Self {
        RdfObject::Class(class)
    }
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: NamedNode,
    /// Predicate
    pub predicate: RdfPredicate,
    /// Object
    pub object: RdfObject,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: NamedNode, predicate: impl Into<RdfPredicate>, object: impl Into<RdfObject>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// `subject a class` declaration
    pub fn type_declaration(subject: NamedNode, class: PostClass) -> Self {
        Self::new(subject, RdfPredicate::Type, class)
    }
}

/// One self-contained Turtle statement, terminated by ` .`
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
