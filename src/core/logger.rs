//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_event::LogEvent,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    property_value::{LogEventProperty, LogValue},
};
use crate::destructure::{Destructure, PropertyValueFactory};
use parking_lot::Mutex;
use std::sync::Arc;

/// Synchronous logger
///
/// Cloning a logger is cheap: clones share appenders, the destructuring
/// registry and metrics. Loggers are created from a
/// [`LoggerConfiguration`](super::configuration::LoggerConfiguration).
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    appenders: Arc<Mutex<Vec<Box<dyn Appender>>>>,
    destructure: Arc<Destructure>,
    /// Properties attached to every event, already converted
    context: Arc<Vec<LogEventProperty>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub(crate) fn new(
        min_level: LogLevel,
        appenders: Vec<Box<dyn Appender>>,
        destructure: Destructure,
        context: Vec<LogEventProperty>,
    ) -> Self {
        Self {
            min_level,
            appenders: Arc::new(Mutex::new(appenders)),
            destructure: Arc::new(destructure),
            context: Arc::new(context),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Extract a readable message from a panic payload
    fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
        if let Some(s) = panic_info.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        }
    }

    /// Write an event to every appender with per-appender panic isolation
    ///
    /// One failing appender does not prevent the others from receiving the
    /// event. Returns `true` if any appender failed.
    fn process_sync(
        appenders: &mut [Box<dyn Appender>],
        event: &LogEvent,
        metrics: &LoggerMetrics,
    ) -> bool {
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(event)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        Self::panic_message(panic_info.as_ref())
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_dropped();
        } else {
            metrics.record_logged();
        }

        has_error
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// The registry used to convert property values
    pub fn destructure(&self) -> &Destructure {
        &self.destructure
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Convert a value through this logger's destructuring registry
    pub fn create_property(
        &self,
        name: impl Into<String>,
        value: impl Into<LogValue>,
        destructure: bool,
    ) -> Result<LogEventProperty> {
        let value = self
            .destructure
            .create_property_value(&value.into(), destructure)?;
        Ok(LogEventProperty::new(name, value))
    }

    /// A child logger that attaches `name` to every event it writes
    ///
    /// The value is converted once, here. Fails if destructuring rejects it.
    pub fn for_context(
        &self,
        name: impl Into<String>,
        value: impl Into<LogValue>,
        destructure: bool,
    ) -> Result<Logger> {
        let property = self.create_property(name, value, destructure)?;

        let mut context: Vec<LogEventProperty> = self
            .context
            .iter()
            .filter(|p| p.name != property.name)
            .cloned()
            .collect();
        context.push(property);

        Ok(Logger {
            min_level: self.min_level,
            appenders: Arc::clone(&self.appenders),
            destructure: Arc::clone(&self.destructure),
            context: Arc::new(context),
            metrics: Arc::clone(&self.metrics),
        })
    }

    /// Attach context properties and write a fully built event
    ///
    /// Properties already on the event take precedence over context
    /// properties with the same name.
    pub fn write(&self, mut event: LogEvent) {
        if !self.is_enabled(event.level) {
            return;
        }
        for property in self.context.iter() {
            event.add_property_if_absent(property.clone());
        }

        let mut appenders = self.appenders.lock();
        Self::process_sync(&mut appenders, &event, &self.metrics);
    }

    /// Record an event abandoned because a value could not be converted
    pub(crate) fn report_destructure_failure(
        &self,
        level: LogLevel,
        message: &str,
        error: &dyn std::fmt::Display,
    ) {
        self.metrics.record_destructure_failure();
        self.metrics.record_dropped();
        eprintln!(
            "[LOGGER WARNING] Dropped {} event \"{}\": {}",
            level, message, error
        );
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.is_enabled(level) {
            self.write(LogEvent::new(level, message));
        }
    }

    pub fn verbose(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn information(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Information, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("appenders", &self.appenders.lock().len())
            .field("destructure", &self.destructure)
            .field("context", &self.context)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Only the last clone flushes.
        if Arc::strong_count(&self.appenders) == 1 {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush on drop: {}", e);
            }
        }
    }
}
