//! Output sinks for rendered Turtle

use std::io::{self, Write};

/// Destination for ordered UTF-8 text chunks
pub trait TextSink {
    /// Append one chunk
    fn write_chunk(&mut self, chunk: &str) -> io::Result<()>;

    /// Flush buffered output, if any
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TextSink for String {
    fn write_chunk(&mut self, chunk: &str) -> io::Result<()> {
        self.push_str(chunk);
        Ok(())
    }
}

/// Keeps every chunk as its own entry
impl TextSink for Vec<String> {
    fn write_chunk(&mut self, chunk: &str) -> io::Result<()> {
        self.push(chunk.to_string());
        Ok(())
    }
}

/// Adapter for any `io::Write` (files, stdout, sockets)
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TextSink for IoSink<W> {
    fn write_chunk(&mut self, chunk: &str) -> io::Result<()> {
        self.inner.write_all(chunk.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
