//! Triple rendering
//!
//! Every statement is written as an independent `subject predicate object .`
//! line. Per post the order is:
//! 1. `a sioc:Post`, `a tsioc:Question|Answer`, then `a tsioc:BestAnswer` if marked
//! 2. the primary text predicate (`dc:title` for questions, `sioc:content` for answers)
//! 3. the remaining attributes in predicate table order, one line per list entry
//!
//! Unresolved foreign keys and empty lists produce no lines.

use crate::graph::PostGraph;
use crate::post::{AttributeValue, Post, PostHandle};
use crate::rdf::{PostClass, Predicate, RdfObject, Triple};

/// Renders linked posts of one graph
#[derive(Debug, Clone, Copy)]
pub struct TripleRenderer<'g> {
    graph: &'g PostGraph,
}

impl<'g> TripleRenderer<'g> {
    pub fn new(graph: &'g PostGraph) -> Self {
        Self { graph }
    }

    /// Triples for one post, in output order
    pub fn triples(&self, handle: PostHandle) -> Vec<Triple> {
        let Some(post) = self.graph.get(handle) else {
            return Vec::new();
        };
        let mut triples = Vec::new();

        let subject = post.uri();
        triples.push(Triple::type_declaration(subject.clone(), PostClass::Post));
        triples.push(Triple::type_declaration(subject.clone(), post.class()));
        if post.is_best_answer() {
            triples.push(Triple::type_declaration(subject.clone(), PostClass::BestAnswer));
        }

        let primary = post.primary_predicate();
        if let Some(value) = post.attribute(primary) {
            self.push_value(&mut triples, post, primary, value);
        }
        for (&predicate, value) in post.attributes() {
            if predicate != primary {
                self.push_value(&mut triples, post, predicate, value);
            }
        }

        triples
    }

    /// Rendered lines for one post, without line terminators
    pub fn render(&self, handle: PostHandle) -> Vec<String> {
        self.triples(handle)
            .iter()
            .map(Triple::to_string)
            .collect()
    }

    fn push_value(
        &self,
        triples: &mut Vec<Triple>,
        post: &Post,
        predicate: Predicate,
        value: &AttributeValue,
    ) {
        let object = match value {
            AttributeValue::Literal(lit) => RdfObject::Literal(lit.clone()),
            AttributeValue::TypedLiteral(lit, dt) => RdfObject::TypedLiteral(lit.clone(), *dt),
            AttributeValue::Resource(node) => RdfObject::NamedNode(node.clone()),
            AttributeValue::Reference(target) => match self.graph.get(*target) {
                Some(target) => RdfObject::NamedNode(target.uri().clone()),
                None => return,
            },
            AttributeValue::List(items) => {
                for item in items {
                    self.push_value(triples, post, predicate, item);
                }
                return;
            }
            AttributeValue::ForeignKey(_) => return,
        };
        triples.push(Triple::new(post.uri().clone(), predicate, object));
    }
}
