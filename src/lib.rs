//! # Rust Logger Calendar
//!
//! Structured logging with stable, round-trippable representations of
//! calendar and time values.
//!
//! ## Features
//!
//! - **Destructuring policies**: instants, local, offset and zoned date-times,
//!   durations, periods, intervals, zones and calendar systems are logged in a
//!   canonical text form instead of as opaque object dumps
//! - **ISO calendar gate**: values whose calendar the canonical form cannot
//!   record are rejected rather than silently misrepresented
//! - **Appenders**: colored console, compact JSON lines and in-memory capture
//! - **Thread Safe**: loggers and policies can be shared across threads
//!
//! ## Example
//!
//! ```
//! use rust_logger_calendar::prelude::*;
//! use std::sync::Arc;
//!
//! let memory = MemoryAppender::new();
//! let logger = LoggerConfiguration::new()
//!     .configure_for_calendar(Arc::new(FixedZoneProvider::new()))
//!     .unwrap()
//!     .appender(memory.clone())
//!     .create_logger();
//!
//! let offset = Offset::from_hours_and_minutes(1, 2).unwrap();
//! logger.information_builder()
//!     .message("Offset")
//!     .destructure("Offset", offset)
//!     .log();
//!
//! assert_eq!(memory.events()[0].property("Offset"), Some(&PropertyValue::scalar("+01:02")));
//! ```

pub mod appenders;
pub mod calendar;
pub mod core;
pub mod destructure;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::appenders::{JsonAppender, MemoryAppender};
    pub use crate::calendar::{
        CalendarSystem, CalendarValue, DateTimeZone, Duration, FixedZoneProvider, Instant,
        Interval, LocalDate, LocalDateTime, LocalTime, Offset, OffsetDate, OffsetDateTime,
        OffsetTime, Period, ValueKind, YearMonth, ZoneProvider, ZonedDateTime,
    };
    pub use crate::core::{
        Appender, LogEvent, LogEventBuilder, LogEventProperty, LogLevel, LogValue, Logger,
        LoggerConfiguration, LoggerError, LoggerMetrics, OutputFormat, PropertyValue, Result,
        ScalarValue, StructureValue,
    };
    pub use crate::destructure::{
        Destructure, DestructuringPolicy, PropertyValueFactory, ZonedDateTimePolicy,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
pub use appenders::{JsonAppender, MemoryAppender};
pub use core::{
    Appender, LogEvent, LogEventBuilder, LogEventProperty, LogLevel, LogValue, Logger,
    LoggerConfiguration, LoggerError, LoggerMetrics, OutputFormat, PropertyValue, Result,
    ScalarValue, StructureValue,
};
pub use destructure::{Destructure, DestructuringPolicy, PropertyValueFactory};
