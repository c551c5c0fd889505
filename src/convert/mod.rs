//! Conversion driver
//!
//! classify → project → link → render, over the whole record set:
//! 1. every record is classified and projected into a post (malformed ones are skipped)
//! 2. posts go into a `PostGraph`, questions and answers in input order
//! 3. the linker resolves replies, parents and accepted answers
//! 4. the prefix header is written, then one block per question, then per answer
//!
//! Linking finishes before rendering starts; with `parallel` set, projection
//! and rendering run on rayon and are merged back in input order.

mod sink;

use crate::config::{ConfigError, ConverterConfig};
use crate::graph::{link, LinkStats, PostGraph};
use crate::post::{classify, Post, PostError, PostResult, Projector, Record, RecordKind};
use crate::rdf::NamespaceManager;
use crate::render::TripleRenderer;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use sink::{IoSink, TextSink};

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A record could not become a post (only fatal in strict mode)
    #[error("Malformed record #{index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: PostError,
    },

    /// Writing to the sink failed; output may be partial
    #[error("Sink write failure: {0}")]
    SinkWriteFailure(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ConversionResult<T> = Result<T, ConversionError>;

/// A record left out of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the input
    pub index: usize,
    pub error: PostError,
}

/// Summary of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub questions: usize,
    pub answers: usize,
    /// Records that are neither questions nor answers
    pub discarded: usize,
    pub malformed: Vec<SkippedRecord>,
    pub links: LinkStats,
    /// Post blocks written to the sink
    pub posts_written: usize,
}

/// Converts record collections into Turtle
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    projector: Projector,
    namespaces: NamespaceManager,
}

impl Converter {
    /// Create a converter, validating the configuration
    pub fn new(config: ConverterConfig) -> ConversionResult<Self> {
        config.validate()?;
        let projector = config.projector()?;
        Ok(Self {
            config,
            projector,
            namespaces: NamespaceManager::new(),
        })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// The `@prefix` block written before any triple
    pub fn header(&self) -> String {
        self.namespaces.header()
    }

    /// Classify, project and link all records
    pub fn build_graph<I>(&self, records: I) -> ConversionResult<(PostGraph, ConversionReport)>
    where
        I: IntoIterator<Item = Record>,
    {
        let records: Vec<Record> = records.into_iter().collect();
        info!("Classifying {} records", records.len());

        let outcomes: Vec<(RecordKind, PostResult<Option<Post>>)> = if self.config.parallel {
            records.par_iter().map(|r| self.project(r)).collect()
        } else {
            records.iter().map(|r| self.project(r)).collect()
        };

        let mut graph = PostGraph::new();
        let mut report = ConversionReport::default();
        for (index, (kind, outcome)) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(Some(post)) => {
                    match kind {
                        RecordKind::Answer => report.answers += 1,
                        _ => report.questions += 1,
                    }
                    graph.insert(post);
                }
                Ok(None) => {
                    debug!("Record #{} is not a question or answer, discarded", index);
                    report.discarded += 1;
                }
                Err(error) if self.config.strict => {
                    return Err(ConversionError::MalformedRecord { index, source: error });
                }
                Err(error) => {
                    warn!("Skipping record #{}: {}", index, error);
                    report.malformed.push(SkippedRecord { index, error });
                }
            }
        }

        report.links = link(&mut graph);
        Ok((graph, report))
    }

    /// Convert records and write the Turtle document to `sink`
    pub fn convert<I, S>(&self, records: I, sink: &mut S) -> ConversionResult<ConversionReport>
    where
        I: IntoIterator<Item = Record>,
        S: TextSink + ?Sized,
    {
        let (graph, mut report) = self.build_graph(records)?;

        sink.write_chunk(&self.header())?;
        sink.write_chunk("\n")?;

        let limit = self.config.limit_per_kind.unwrap_or(usize::MAX);
        let handles: Vec<_> = graph
            .questions()
            .iter()
            .take(limit)
            .chain(graph.answers().iter().take(limit))
            .copied()
            .collect();

        let renderer = TripleRenderer::new(&graph);
        if self.config.parallel {
            let blocks: Vec<Vec<String>> = handles.par_iter().map(|&h| renderer.render(h)).collect();
            for lines in &blocks {
                write_block(sink, lines)?;
                report.posts_written += 1;
            }
        } else {
            for &h in &handles {
                write_block(sink, &renderer.render(h))?;
                report.posts_written += 1;
            }
        }
        sink.flush()?;

        info!(
            "Wrote {} posts ({} questions, {} answers, {} discarded, {} malformed)",
            report.posts_written,
            report.questions,
            report.answers,
            report.discarded,
            report.malformed.len()
        );
        Ok(report)
    }

    fn project(&self, record: &Record) -> (RecordKind, PostResult<Option<Post>>) {
        let kind = classify(record);
        (kind, self.projector.build(kind, record))
    }
}

/// Convert with the default configuration
pub fn convert<I, S>(records: I, sink: &mut S) -> ConversionResult<ConversionReport>
where
    I: IntoIterator<Item = Record>,
    S: TextSink + ?Sized,
{
    Converter::new(ConverterConfig::default())?.convert(records, sink)
}

/// Post lines followed by a blank separator line
fn write_block<S: TextSink + ?Sized>(sink: &mut S, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        sink.write_chunk(line)?;
        sink.write_chunk("\n")?;
    }
    sink.write_chunk("\n")
}
