//! In-memory appender
//!
//! Collects events so tests can inspect exactly what a logger wrote.

use crate::core::{Appender, LogEvent, OutputFormat, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Appender that keeps every event in a shared buffer
///
/// Clones share the buffer, so one clone can be handed to the logger and
/// another kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events written so far
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<LogEvent> {
        self.events.lock().last().cloned()
    }

    /// Every event rendered in the given format, one string per event
    pub fn render(&self, format: OutputFormat) -> Vec<String> {
        self.events.lock().iter().map(|e| format.format(e)).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryAppender::new();
        let mut writer = memory.clone();

        writer.append(&LogEvent::new(LogLevel::Information, "one")).unwrap();
        writer.append(&LogEvent::new(LogLevel::Error, "two")).unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.last().map(|e| e.message), Some("two".to_string()));

        memory.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_render_compact_json() {
        let mut memory = MemoryAppender::new();
        memory.append(&LogEvent::new(LogLevel::Information, "rendered")).unwrap();

        let lines = memory.render(OutputFormat::CompactJson);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"@m\":\"rendered\""));
    }
}
