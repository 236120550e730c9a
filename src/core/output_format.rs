//! Output format configuration for log events
//!
//! - Text: human-readable, one line per event
//! - CompactJson: one JSON object per line with `@`-prefixed event fields

use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::property_value::{PropertyValue, ScalarValue};

/// Output format for log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `[2018-12-11T10:09:08Z] [INF] Request processed Elapsed=0:00:00:01.5`
    #[default]
    Text,

    /// Example: `{"@t":"2018-12-11T10:09:08Z","@m":"Request processed","Elapsed":"0:00:00:01.5"}`
    ///
    /// `@l` is omitted for `Information`. Property names that start with `@`
    /// are written with the `@` doubled.
    CompactJson,
}

impl OutputFormat {
    pub fn format(&self, event: &LogEvent) -> String {
        match self {
            OutputFormat::Text => Self::format_text(event),
            OutputFormat::CompactJson => Self::format_compact_json(event),
        }
    }

    fn format_text(event: &LogEvent) -> String {
        let mut line = format!(
            "[{}] [{}] {}",
            event.timestamp,
            event.level.short_name(),
            event.message
        );
        // Property text gets the same escaping as the message, so a value
        // cannot start a new line.
        for property in &event.properties {
            line.push(' ');
            line.push_str(&LogEvent::sanitize_message(&property.name));
            line.push('=');
            match &property.value {
                PropertyValue::Scalar(ScalarValue::String(s)) if s.contains(' ') => {
                    line.push_str(&format!("{:?}", s));
                }
                value => line.push_str(&LogEvent::sanitize_message(&value.to_string())),
            }
        }
        line
    }

    fn format_compact_json(event: &LogEvent) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "@t".to_string(),
            serde_json::Value::String(event.timestamp.to_string()),
        );
        json_obj.insert(
            "@m".to_string(),
            serde_json::Value::String(event.message.clone()),
        );
        if event.level != LogLevel::Information {
            json_obj.insert(
                "@l".to_string(),
                serde_json::Value::String(event.level.to_str().to_string()),
            );
        }

        for property in &event.properties {
            let name = if property.name.starts_with('@') {
                format!("@{}", property.name)
            } else {
                property.name.clone()
            };
            json_obj.insert(name, property.value.to_json_value());
        }

        serde_json::Value::Object(json_obj).to_string()
    }
}
