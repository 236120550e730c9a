//! Compact JSON appender
//!
//! Writes each event as a single-line JSON object (JSONL) in the compact
//! format: `@t`, `@m`, `@l` and then the event properties.

use crate::core::{Appender, LogEvent, OutputFormat, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonAppender {
    writer: BufWriter<Box<dyn Write + Send + Sync>>,
}

impl JsonAppender {
    /// Append to a file, creating it if needed
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }

    /// Write to any sink, such as a socket or an in-memory buffer
    pub fn from_writer<W: Write + Send + Sync + 'static>(writer: W) -> Self {
        Self {
            writer: BufWriter::new(Box::new(writer)),
        }
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, event: &LogEvent) -> Result<()> {
        writeln!(self.writer, "{}", OutputFormat::CompactJson.format(event))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
