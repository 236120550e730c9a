//! Log event structure

use super::log_level::LogLevel;
use super::property_value::{LogEventProperty, PropertyValue};
use crate::calendar::Instant;

/// A single event as handed to appenders
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub timestamp: Instant,
    pub level: LogLevel,
    pub message: String,
    pub properties: Vec<LogEventProperty>,
}

impl LogEvent {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    pub(crate) fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            timestamp: Instant::now(),
            level,
            message: Self::sanitize_message(message.as_ref()),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Add a property, replacing any earlier property with the same name
    pub fn add_property(&mut self, property: LogEventProperty) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => existing.value = property.value,
            None => self.properties.push(property),
        }
    }

    /// Add a property only if none with that name exists yet
    pub fn add_property_if_absent(&mut self, property: LogEventProperty) {
        if self.property(&property.name).is_none() {
            self.properties.push(property);
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}
