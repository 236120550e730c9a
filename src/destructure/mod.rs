//! Destructuring policies for calendar values
//!
//! A policy turns one calendar value type into a loggable property value. The
//! [`Destructure`] registry offers each value to its policies in registration
//! order and the first one bound to the value's kind produces the result.
//!
//! # Example
//!
//! ```
//! use rust_logger_calendar::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Destructure::new()
//!     .with_calendar_types(Arc::new(FixedZoneProvider::new()))
//!     .unwrap();
//!
//! let instant = Instant::from_unix_millis(0).unwrap();
//! let value = registry
//!     .create_property_value(&LogValue::calendar(instant), true)
//!     .unwrap();
//!
//! assert_eq!(value, PropertyValue::scalar("1970-01-01T00:00:00Z"));
//! ```

pub mod extensions;
pub mod interval;
pub mod pattern;
pub mod policy;
pub mod registry;

pub use interval::IntervalPolicy;
pub use pattern::{
    GeneralPattern, IdPattern, IsoPattern, Pattern, Rfc3339Pattern, RoundtripPattern,
    ZonedDateTimePattern,
};
pub use policy::{
    require_iso, CalendarSystemPolicy, DateTimeZonePolicy, DurationPolicy, InstantPolicy,
    LocalDatePolicy, LocalDateTimePolicy, LocalTimePolicy, OffsetDatePolicy,
    OffsetDateTimePolicy, OffsetPolicy, OffsetTimePolicy, PatternPolicy, PeriodPolicy,
    Validator, YearMonthPolicy, ZonedDateTimePolicy,
};
pub use registry::Destructure;

use crate::calendar::{CalendarValue, ValueKind};
use crate::core::error::Result;
use crate::core::property_value::{LogValue, PropertyValue};

/// Converts arbitrary log values into property values
///
/// Policies that build structures call back into the factory so nested
/// values go through the same registry.
pub trait PropertyValueFactory {
    fn create_property_value(&self, value: &LogValue, destructure: bool) -> Result<PropertyValue>;
}

/// Attempts to convert one kind of calendar value into a property value
///
/// `Ok(None)` means the value is not of the bound kind and has no other
/// effect. `Ok(Some(_))` claims the value. `Err(_)` also claims it but reports
/// that the value is in a state the policy refuses to format.
pub trait DestructuringPolicy: Send + Sync {
    /// The kind of value this policy is bound to
    fn kind(&self) -> ValueKind;

    fn try_destructure(
        &self,
        value: &CalendarValue,
        factory: &dyn PropertyValueFactory,
    ) -> Result<Option<PropertyValue>>;
}
