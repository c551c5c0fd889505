//! Record sources
//!
//! Readers that turn a dump into the flat records the converter consumes.
//! - `xml`: Stack Exchange `Posts.xml` (`<posts><row .../></posts>`)
//! - `json`: an array of flat JSON objects

pub mod json;
pub mod xml;

use crate::post::Record;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Source errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row that cannot be flattened into a record
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Dump format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Xml,
    Json,
}

impl SourceFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "xml" => Some(SourceFormat::Xml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// Read every record from `reader`
pub fn read_records<R: BufRead>(format: SourceFormat, reader: R) -> SourceResult<Vec<Record>> {
    match format {
        SourceFormat::Xml => xml::read_records(reader),
        SourceFormat::Json => json::read_records(reader),
    }
}
