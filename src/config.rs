//! Converter configuration
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! base_uri: "http://example.org/posts/"
//! extra_topics:
//!   stm32: "http://dbpedia.org/resource/STM32"
//! limit_per_kind: 5
//! parallel: true
//! ```

use crate::post::{Projector, TopicVocabulary};
use crate::rdf::{NamedNode, RdfError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default topic table shipped with the crate
const DEFAULT_TOPICS: &str = include_str!("../config/topics.yaml");

pub const DEFAULT_BASE_URI: &str = "http://vocab.inf.ed.ac.uk/sws#post";
pub const DEFAULT_TAG_BASE_URI: &str = "http://vocab.inf.ed.ac.uk/sws#tag_";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configured URI is not a valid IRI
    #[error("Invalid {field}: {source}")]
    InvalidUri {
        field: &'static str,
        #[source]
        source: RdfError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Prefix of post URIs; the post id is appended
    pub base_uri: String,

    /// Prefix of generated URIs for tags outside the topic table
    pub tag_base_uri: String,

    /// Normalized tag → canonical URI
    pub topics: IndexMap<String, String>,

    /// Merged over `topics`
    pub extra_topics: IndexMap<String, String>,

    /// Render at most this many questions and this many answers
    pub limit_per_kind: Option<usize>,

    /// Project records and render posts on the rayon pool
    pub parallel: bool,

    /// Abort on the first malformed record instead of skipping it
    pub strict: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            tag_base_uri: DEFAULT_TAG_BASE_URI.to_string(),
            topics: default_topics(),
            extra_topics: IndexMap::new(),
            limit_per_kind: None,
            parallel: false,
            strict: false,
        }
    }
}

/// The embedded topic table
pub fn default_topics() -> IndexMap<String, String> {
    serde_yaml::from_str(DEFAULT_TOPICS).unwrap_or_default()
}

impl ConverterConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        info!("Loading converter config from {:?}", path);
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check that the base URIs and the topic table produce valid IRIs
    pub fn validate(&self) -> ConfigResult<()> {
        NamedNode::new(format!("{}0", self.base_uri))
            .map_err(|source| ConfigError::InvalidUri { field: "base_uri", source })?;
        NamedNode::new(format!("{}tag", self.tag_base_uri))
            .map_err(|source| ConfigError::InvalidUri { field: "tag_base_uri", source })?;
        self.topic_vocabulary()?;
        Ok(())
    }

    /// Topic table with `extra_topics` applied
    pub fn topic_vocabulary(&self) -> ConfigResult<TopicVocabulary> {
        let entries = self
            .topics
            .iter()
            .chain(self.extra_topics.iter())
            .map(|(tag, uri)| (tag.as_str(), uri.clone()));
        TopicVocabulary::new(self.tag_base_uri.clone(), entries)
            .map_err(|source| ConfigError::InvalidUri { field: "topics", source })
    }

    /// Projector for this configuration
    pub fn projector(&self) -> ConfigResult<Projector> {
        Ok(Projector::new(self.base_uri.clone(), self.topic_vocabulary()?))
    }
}
