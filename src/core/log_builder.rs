//! Fluent construction of log events with properties
//!
//! Values added with [`LogEventBuilder::destructure`] are offered to the
//! logger's destructuring policies; values added with
//! [`LogEventBuilder::property`] are captured as their display text.

use super::error::Result;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::property_value::LogValue;
use crate::calendar::Instant;

/// Builder for a single log event
///
/// # Example
///
/// ```
/// use rust_logger_calendar::prelude::*;
/// use std::sync::Arc;
///
/// let memory = MemoryAppender::new();
/// let logger = LoggerConfiguration::new()
///     .configure_for_calendar(Arc::new(FixedZoneProvider::new()))
///     .unwrap()
///     .appender(memory.clone())
///     .create_logger();
///
/// logger.information_builder()
///     .message("Request processed")
///     .destructure("Elapsed", Duration::from_seconds(90).unwrap())
///     .property("Status", 200)
///     .log();
///
/// let event = &memory.events()[0];
/// assert_eq!(event.property("Elapsed"), Some(&PropertyValue::scalar("0:00:01:30")));
/// ```
pub struct LogEventBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    message: String,
    timestamp: Option<Instant>,
    values: Vec<(String, LogValue, bool)>,
}

impl<'a> LogEventBuilder<'a> {
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            timestamp: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Use a fixed timestamp instead of the current instant
    #[must_use]
    pub fn timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Capture a value without destructuring it
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<LogValue>) -> Self {
        self.values.push((name.into(), value.into(), false));
        self
    }

    /// Capture a value through the destructuring policies
    #[must_use]
    pub fn destructure(mut self, name: impl Into<String>, value: impl Into<LogValue>) -> Self {
        self.values.push((name.into(), value.into(), true));
        self
    }

    /// Convert every value and build the event
    ///
    /// Values are converted in the order they were added; the first failure
    /// is returned and no event is built.
    pub fn build(self) -> Result<LogEvent> {
        let mut event = LogEvent::new(self.level, &self.message);
        if let Some(timestamp) = self.timestamp {
            event = event.with_timestamp(timestamp);
        }
        for (name, value, destructure) in self.values {
            let property = self.logger.create_property(name, value, destructure)?;
            event.add_property(property);
        }
        Ok(event)
    }

    /// Build and write the event, returning any conversion error
    pub fn try_log(self) -> Result<()> {
        if !self.logger.is_enabled(self.level) {
            return Ok(());
        }
        let logger = self.logger;
        let event = self.build()?;
        logger.write(event);
        Ok(())
    }

    /// Build and write the event
    ///
    /// An event whose values cannot be converted is dropped and reported
    /// through the logger's metrics and self-diagnostics.
    pub fn log(self) {
        let logger = self.logger;
        let level = self.level;
        let message = self.message.clone();
        if let Err(e) = self.try_log() {
            logger.report_destructure_failure(level, &message, &e);
        }
    }
}

impl Logger {
    pub fn event(&self, level: LogLevel) -> LogEventBuilder<'_> {
        LogEventBuilder::new(self, level)
    }

    pub fn verbose_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Verbose)
    }

    pub fn debug_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Debug)
    }

    pub fn information_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Information)
    }

    pub fn warning_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Warning)
    }

    pub fn error_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Error)
    }

    pub fn fatal_builder(&self) -> LogEventBuilder<'_> {
        self.event(LogLevel::Fatal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::calendar::{CalendarSystem, FixedZoneProvider, LocalDateTime};
    use crate::core::configuration::LoggerConfiguration;
    use std::sync::Arc;

    fn logger(memory: &MemoryAppender) -> Logger {
        LoggerConfiguration::new()
            .configure_for_calendar(Arc::new(FixedZoneProvider::new()))
            .unwrap()
            .appender(memory.clone())
            .create_logger()
    }

    #[test]
    fn test_property_vs_destructure() {
        let memory = MemoryAppender::new();
        let logger = logger(&memory);
        let julian = LocalDateTime::new(2018, 12, 11, 10, 9, 8)
            .unwrap()
            .with_calendar(CalendarSystem::Julian);

        logger
            .information_builder()
            .message("plain")
            .property("When", julian)
            .try_log()
            .unwrap();

        let event = &memory.events()[0];
        assert_eq!(
            event.property("When").and_then(|v| v.as_scalar()).and_then(|s| s.as_str()),
            Some("2018-12-11T10:09:08 (Julian)")
        );
    }

    #[test]
    fn test_try_log_surfaces_invalid_data() {
        let memory = MemoryAppender::new();
        let logger = logger(&memory);
        let julian = LocalDateTime::new(2018, 12, 11, 10, 9, 8)
            .unwrap()
            .with_calendar(CalendarSystem::Julian);

        let err = logger
            .information_builder()
            .destructure("When", julian)
            .try_log()
            .unwrap_err();

        assert!(err.is_invalid_data());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_log_drops_and_counts() {
        let memory = MemoryAppender::new();
        let logger = logger(&memory);
        let julian = LocalDateTime::new(2018, 12, 11, 10, 9, 8)
            .unwrap()
            .with_calendar(CalendarSystem::Julian);

        logger.warning_builder().destructure("When", julian).log();
        logger.warning_builder().message("fine").log();

        assert_eq!(memory.len(), 1);
        assert_eq!(logger.metrics().destructure_failures(), 1);
        assert_eq!(logger.metrics().dropped_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_disabled_level_skips_conversion() {
        let memory = MemoryAppender::new();
        let logger = LoggerConfiguration::new()
            .min_level(LogLevel::Error)
            .configure_for_calendar(Arc::new(FixedZoneProvider::new()))
            .unwrap()
            .appender(memory.clone())
            .create_logger();
        let julian = LocalDateTime::new(2018, 12, 11, 10, 9, 8)
            .unwrap()
            .with_calendar(CalendarSystem::Julian);

        assert!(logger.debug_builder().destructure("When", julian).try_log().is_ok());
        assert!(memory.is_empty());
    }
}
