//! Fixed SIOC / Dublin Core vocabulary used for forum posts

use std::fmt;

/// Dublin Core elements namespace
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// SIOC core namespace
pub const SIOC: &str = "http://rdfs.org/sioc/ns#";
/// SIOC types module namespace
pub const TSIOC: &str = "http://rdfs.org/sioc/types#";
/// XML Schema datatypes namespace
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Properties a post may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    Title,
    Content,
    Date,
    Topic,
    HasReply,
    HasParent,
}

impl Predicate {
    /// Prefixed name, e.g. `dc:title`
    pub fn curie(&self) -> &'static str {
        match self {
            Predicate::Title => "dc:title",
            Predicate::Content => "sioc:content",
            Predicate::Date => "dc:date",
            Predicate::Topic => "sioc:topic",
            Predicate::HasReply => "sioc:has_reply",
            Predicate::HasParent => "sioc:has_parent",
        }
    }

    /// Full IRI
    pub fn iri(&self) -> String {
        let (ns, local) = match self {
            Predicate::Title => (DC, "title"),
            Predicate::Content => (SIOC, "content"),
            Predicate::Date => (DC, "date"),
            Predicate::Topic => (SIOC, "topic"),
            Predicate::HasReply => (SIOC, "has_reply"),
            Predicate::HasParent => (SIOC, "has_parent"),
        };
        format!("{}{}", ns, local)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.curie())
    }
}

/// Classes a post is declared as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostClass {
    /// sioc:Post, shared by every post
    Post,
    Question,
    Answer,
    BestAnswer,
}

impl PostClass {
    pub fn curie(&self) -> &'static str {
        match self {
            PostClass::Post => "sioc:Post",
            PostClass::Question => "tsioc:Question",
            PostClass::Answer => "tsioc:Answer",
            PostClass::BestAnswer => "tsioc:BestAnswer",
        }
    }

    pub fn iri(&self) -> String {
        match self {
            PostClass::Post => format!("{}Post", SIOC),
            PostClass::Question => format!("{}Question", TSIOC),
            PostClass::Answer => format!("{}Answer", TSIOC),
            PostClass::BestAnswer => format!("{}BestAnswer", TSIOC),
        }
    }
}

impl fmt::Display for PostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.curie())
    }
}

/// Literal datatypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    DateTime,
}

impl Datatype {
    pub fn curie(&self) -> &'static str {
        match self {
            Datatype::DateTime => "xsd:dateTime",
        }
    }

    pub fn iri(&self) -> String {
        match self {
            Datatype::DateTime => format!("{}dateTime", XSD),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.curie())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::NamespaceManager;

    #[test]
    fn test_curies_expand_to_iris() {
        let ns = NamespaceManager::new();
        for p in [
            Predicate::Title,
            Predicate::Content,
            Predicate::Date,
            Predicate::Topic,
            Predicate::HasReply,
            Predicate::HasParent,
        ] {
            assert_eq!(ns.expand(p.curie()).unwrap(), p.iri());
        }
        for c in [
            PostClass::Post,
            PostClass::Question,
            PostClass::Answer,
            PostClass::BestAnswer,
        ] {
            assert_eq!(ns.expand(c.curie()).unwrap(), c.iri());
        }
        assert_eq!(
            ns.expand(Datatype::DateTime.curie()).unwrap(),
            Datatype::DateTime.iri()
        );
    }
}
