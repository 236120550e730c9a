//! Core logger types and traits

pub mod appender;
pub mod configuration;
pub mod error;
pub mod log_builder;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod property_value;

pub use appender::Appender;
pub use configuration::LoggerConfiguration;
pub use error::{LoggerError, Result};
pub use log_builder::LogEventBuilder;
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use property_value::{LogEventProperty, LogValue, PropertyValue, ScalarValue, StructureValue};
