//! Question and answer entities

use crate::rdf::{Datatype, Literal, NamedNode, PostClass, Predicate};
use indexmap::IndexMap;
use std::fmt;

/// Index of a post inside a `PostGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostHandle(pub usize);

impl PostHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostHandle({})", self.0)
    }
}

/// Object side of a post attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Escaped, quoted string
    Literal(Literal),
    TypedLiteral(Literal, Datatype),
    /// External resource, e.g. a topic
    Resource(NamedNode),
    /// Another post in the same graph
    Reference(PostHandle),
    List(Vec<AttributeValue>),
    /// Raw foreign key waiting for the linker; never rendered
    ForeignKey(String),
}

impl AttributeValue {
    /// Get list items if this is a list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the referenced post if this is a reference
    pub fn as_reference(&self) -> Option<PostHandle> {
        match self {
            AttributeValue::Reference(h) => Some(*h),
            _ => None,
        }
    }
}

/// Predicate → value, in insertion order
pub type Attributes = IndexMap<Predicate, AttributeValue>;

/// Variant-specific post data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostKind {
    Question {
        /// Raw `AcceptedAnswerId`, only read by the linker
        accepted_answer_id: Option<String>,
    },
    Answer {
        /// Raw `ParentId`, only read by the linker
        parent_id: String,
        best_answer: bool,
    },
}

/// A question or answer
///
/// `id` and `uri` are fixed at construction. After projection, attributes
/// are only changed through the crate-private linking methods.
#[derive(Debug, Clone)]
pub struct Post {
    id: String,
    uri: NamedNode,
    kind: PostKind,
    attributes: Attributes,
}

impl Post {
    pub(crate) fn new(id: String, uri: NamedNode, kind: PostKind, attributes: Attributes) -> Self {
        Self {
            id,
            uri,
            kind,
            attributes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn uri(&self) -> &NamedNode {
        &self.uri
    }

    pub fn kind(&self) -> &PostKind {
        &self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, predicate: Predicate) -> Option<&AttributeValue> {
        self.attributes.get(&predicate)
    }

    pub fn is_question(&self) -> bool {
        matches!(self.kind, PostKind::Question { .. })
    }

    pub fn is_answer(&self) -> bool {
        matches!(self.kind, PostKind::Answer { .. })
    }

    /// `tsioc:Question` or `tsioc:Answer`
    pub fn class(&self) -> PostClass {
        match self.kind {
            PostKind::Question { .. } => PostClass::Question,
            PostKind::Answer { .. } => PostClass::Answer,
        }
    }

    /// Predicate rendered before all others
    pub fn primary_predicate(&self) -> Predicate {
        match self.kind {
            PostKind::Question { .. } => Predicate::Title,
            PostKind::Answer { .. } => Predicate::Content,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match &self.kind {
            PostKind::Answer { parent_id, .. } => Some(parent_id),
            PostKind::Question { .. } => None,
        }
    }

    pub fn accepted_answer_id(&self) -> Option<&str> {
        match &self.kind {
            PostKind::Question { accepted_answer_id } => accepted_answer_id.as_deref(),
            PostKind::Answer { .. } => None,
        }
    }

    pub fn is_best_answer(&self) -> bool {
        matches!(self.kind, PostKind::Answer { best_answer: true, .. })
    }

    /// Posts linked under `sioc:has_reply`, in link order
    pub fn replies(&self) -> Vec<PostHandle> {
        self.attribute(Predicate::HasReply)
            .and_then(AttributeValue::as_list)
            .map(|items| items.iter().filter_map(AttributeValue::as_reference).collect())
            .unwrap_or_default()
    }

    /// Resolved `sioc:has_parent` target
    pub fn parent(&self) -> Option<PostHandle> {
        self.attribute(Predicate::HasParent)
            .and_then(AttributeValue::as_reference)
    }

    pub(crate) fn push_reply(&mut self, reply: PostHandle) {
        match self
            .attributes
            .entry(Predicate::HasReply)
            .or_insert_with(|| AttributeValue::List(Vec::new()))
        {
            AttributeValue::List(items) => items.push(AttributeValue::Reference(reply)),
            other => *other = AttributeValue::List(vec![AttributeValue::Reference(reply)]),
        }
    }

    /// Replace the `has_parent` placeholder, keeping its position
    pub(crate) fn set_parent(&mut self, parent: PostHandle) {
        self.attributes
            .insert(Predicate::HasParent, AttributeValue::Reference(parent));
    }

    pub(crate) fn mark_best_answer(&mut self) {
        if let PostKind::Answer { best_answer, .. } = &mut self.kind {
            *best_answer = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> Post {
        let mut attributes = Attributes::new();
        attributes.insert(
            Predicate::Content,
            AttributeValue::Literal(Literal::new_simple_literal("Call me Ishmael.")),
        );
        attributes.insert(Predicate::HasParent, AttributeValue::ForeignKey("1".to_string()));
        attributes.insert(Predicate::HasReply, AttributeValue::List(Vec::new()));
        Post::new(
            "2".to_string(),
            NamedNode::new("http://example.org/post2").unwrap(),
            PostKind::Answer {
                parent_id: "1".to_string(),
                best_answer: false,
            },
            attributes,
        )
    }

    #[test]
    fn test_answer_accessors() {
        let post = answer();
        assert!(post.is_answer());
        assert_eq!(post.class(), PostClass::Answer);
        assert_eq!(post.parent_id(), Some("1"));
        assert_eq!(post.accepted_answer_id(), None);
        assert_eq!(post.primary_predicate(), Predicate::Content);
        assert!(post.parent().is_none());
        assert!(post.replies().is_empty());
    }

    #[test]
    fn test_set_parent_keeps_position() {
        let mut post = answer();
        post.set_parent(PostHandle(0));
        assert_eq!(post.parent(), Some(PostHandle(0)));
        let order: Vec<Predicate> = post.attributes().keys().copied().collect();
        assert_eq!(
            order,
            vec![Predicate::Content, Predicate::HasParent, Predicate::HasReply]
        );
    }

    #[test]
    fn test_push_reply_and_best_answer() {
        let mut post = answer();
        post.push_reply(PostHandle(3));
        post.push_reply(PostHandle(5));
        assert_eq!(post.replies(), vec![PostHandle(3), PostHandle(5)]);

        assert!(!post.is_best_answer());
        post.mark_best_answer();
        assert!(post.is_best_answer());
    }
}
