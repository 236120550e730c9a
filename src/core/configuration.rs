//! Logger configuration builder

use super::{
    appender::Appender,
    error::Result,
    log_level::LogLevel,
    logger::Logger,
    property_value::{LogEventProperty, LogValue},
};
use crate::destructure::{Destructure, PropertyValueFactory};

/// Builder for a [`Logger`]
///
/// # Example
/// ```
/// use rust_logger_calendar::prelude::*;
///
/// let logger = LoggerConfiguration::new()
///     .min_level(LogLevel::Debug)
///     .destructure(|d| d.with_instant().with_offset())
///     .appender(MemoryAppender::new())
///     .create_logger();
///
/// assert_eq!(logger.min_level(), LogLevel::Debug);
/// ```
pub struct LoggerConfiguration {
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
    destructure: Destructure,
    enrichers: Vec<(String, LogValue, bool)>,
}

impl LoggerConfiguration {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Information,
            appenders: Vec::new(),
            destructure: Destructure::new(),
            enrichers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Attach a property to every event the logger writes
    ///
    /// The value is converted when the logger is created, using the
    /// destructuring configuration in place at that point.
    #[must_use = "builder methods return a new value"]
    pub fn enrich_with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<LogValue>,
        destructure: bool,
    ) -> Self {
        self.enrichers.push((name.into(), value.into(), destructure));
        self
    }

    /// Adjust the destructuring registry
    #[must_use = "builder methods return a new value"]
    pub fn destructure<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Destructure) -> Destructure,
    {
        self.destructure = configure(self.destructure);
        self
    }

    pub fn destructure_config(&self) -> &Destructure {
        &self.destructure
    }

    /// Build the logger
    ///
    /// Fails if an enrichment value is rejected by its destructuring policy.
    pub fn try_create_logger(self) -> Result<Logger> {
        let mut context: Vec<LogEventProperty> = Vec::with_capacity(self.enrichers.len());
        for (name, value, destructure) in &self.enrichers {
            let value = self.destructure.create_property_value(value, *destructure)?;
            context.retain(|p| &p.name != name);
            context.push(LogEventProperty::new(name.clone(), value));
        }
        Ok(Logger::new(
            self.min_level,
            self.appenders,
            self.destructure,
            context,
        ))
    }

    /// Build the logger, skipping enrichment values that cannot be converted
    pub fn create_logger(self) -> Logger {
        let mut context: Vec<LogEventProperty> = Vec::with_capacity(self.enrichers.len());
        for (name, value, destructure) in &self.enrichers {
            match self.destructure.create_property_value(value, *destructure) {
                Ok(value) => {
                    context.retain(|p| &p.name != name);
                    context.push(LogEventProperty::new(name.clone(), value));
                }
                Err(e) => {
                    eprintln!("[LOGGER WARNING] Skipping enrichment property '{}': {}", name, e);
                }
            }
        }
        Logger::new(self.min_level, self.appenders, self.destructure, context)
    }
}

impl std::fmt::Debug for LoggerConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfiguration")
            .field("min_level", &self.min_level)
            .field("appenders", &self.appenders.len())
            .field("destructure", &self.destructure)
            .field("enrichers", &self.enrichers)
            .finish()
    }
}

impl Default for LoggerConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
