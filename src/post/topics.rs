//! Controlled vocabulary for post tags
//!
//! Known tags resolve to their canonical resource; any other tag gets a
//! generated URI under the configured tag base.

use crate::rdf::{NamedNode, RdfResult};
use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in generated tag URIs
const TAG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Trimmed, ASCII-lowercased tag text
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

/// Tag → URI table plus the fallback generator
#[derive(Debug, Clone)]
pub struct TopicVocabulary {
    tag_base_uri: String,
    known: IndexMap<String, NamedNode>,
}

impl TopicVocabulary {
    /// Build a vocabulary, validating every URI in the table
    pub fn new<I, K, V>(tag_base_uri: impl Into<String>, entries: I) -> RdfResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut known = IndexMap::new();
        for (tag, uri) in entries {
            known.insert(normalize_tag(tag.as_ref()), NamedNode::new(uri)?);
        }
        Ok(Self {
            tag_base_uri: tag_base_uri.into(),
            known,
        })
    }

    /// Canonical URI for a tag, if the tag is in the table
    pub fn lookup(&self, tag: &str) -> Option<&NamedNode> {
        self.known.get(&normalize_tag(tag))
    }

    /// Generated URI for a tag outside the table
    pub fn default_uri(&self, tag: &str) -> RdfResult<NamedNode> {
        let encoded = utf8_percent_encode(&normalize_tag(tag), TAG_ENCODE_SET).to_string();
        NamedNode::new(format!("{}{}", self.tag_base_uri, encoded))
    }

    /// Resolve a tag: table entry first, generated URI otherwise
    pub fn resolve(&self, tag: &str) -> RdfResult<NamedNode> {
        match self.lookup(tag) {
            Some(uri) => Ok(uri.clone()),
            None => self.default_uri(tag),
        }
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
