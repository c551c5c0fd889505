//! Field formatting: raw dump text into RDF values

use super::model::AttributeValue;
use crate::rdf::{Datatype, Literal, NamedNode, RdfResult};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Regex for one `<tag>` token
fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<([^<>]*)>").expect("Invalid regex"))
}

/// Plain text field as an escaped string literal
pub fn format_literal(text: &str) -> Literal {
    Literal::new_simple_literal(text)
}

/// Drop sub-second precision: everything from the first `.` on.
pub fn truncate_timestamp(text: &str) -> &str {
    match text.split_once('.') {
        Some((head, _)) => head,
        None => text,
    }
}

/// Timestamp field as an `xsd:dateTime` literal.
///
/// Values that do not parse as a date-time after truncation stay plain literals.
pub fn format_timestamp(text: &str) -> AttributeValue {
    let truncated = truncate_timestamp(text.trim());
    match NaiveDateTime::parse_from_str(truncated, TIMESTAMP_FORMAT) {
        Ok(_) => AttributeValue::TypedLiteral(format_literal(truncated), Datatype::DateTime),
        Err(e) => {
            debug!("Timestamp {:?} is not a date-time ({}), keeping it as text", text, e);
            AttributeValue::Literal(format_literal(text))
        }
    }
}

/// Split a `<tag1><tag2>...` string into its tags, in order.
///
/// Empty tags are skipped and repeated tags kept once.
pub fn parse_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in tag_regex().captures_iter(text) {
        let tag = cap[1].trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// URI of a post: the base URI with the post id appended
pub fn post_uri(base_uri: &str, id: &str) -> RdfResult<NamedNode> {
    NamedNode::new(format!("{}{}", base_uri, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_timestamp() {
        assert_eq!(truncate_timestamp("2014-05-13T23:58:30.457"), "2014-05-13T23:58:30");
        assert_eq!(truncate_timestamp("2014-05-13T23:58:30"), "2014-05-13T23:58:30");
        assert_eq!(truncate_timestamp(".5"), "");
    }

    #[test]
    fn test_format_timestamp() {
        let value = format_timestamp("2014-05-13T23:58:30.457");
        assert_eq!(
            value,
            AttributeValue::TypedLiteral(
                Literal::new_simple_literal("2014-05-13T23:58:30"),
                Datatype::DateTime
            )
        );
    }

    #[test]
    fn test_format_timestamp_not_a_date() {
        let value = format_timestamp("yesterday");
        assert_eq!(value, AttributeValue::Literal(Literal::new_simple_literal("yesterday")));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("<arduino><wifi>"), vec!["arduino", "wifi"]);
        assert_eq!(parse_tags("<c++><arduino-uno>"), vec!["c++", "arduino-uno"]);
        assert_eq!(parse_tags("<a><><a><b>"), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("no brackets").is_empty());
    }

    #[test]
    fn test_post_uri() {
        let uri = post_uri("http://vocab.inf.ed.ac.uk/sws#post", "42").unwrap();
        assert_eq!(uri.to_string(), "<http://vocab.inf.ed.ac.uk/sws#post42>");
        assert!(post_uri("http://vocab.inf.ed.ac.uk/sws#post", "4 2").is_err());
    }
}
