//! Calendar and time value model
//!
//! Immutable value types built on `chrono` that the destructuring policies
//! consume. Every type is closed over by [`CalendarValue`], so dispatch is a
//! match on a tag rather than runtime type inspection.

pub mod calendar_system;
pub mod instant;
pub mod local;
pub mod offset;
pub mod period;
pub mod zone;

use chrono::Timelike;
use std::fmt;

use crate::core::property_value::LogValue;

pub use calendar_system::CalendarSystem;
pub use instant::{Duration, Instant, Interval};
pub use local::{LocalDate, LocalDateTime, LocalTime, YearMonth};
pub use offset::{Offset, OffsetDate, OffsetDateTime, OffsetTime};
pub use period::Period;
pub use zone::{DateTimeZone, FixedZoneProvider, ZoneProvider, ZonedDateTime};

/// A value type that lives inside [`CalendarValue`]
pub trait CalendarType: Into<CalendarValue> + Sized {
    /// Tag identifying this type among calendar values
    const KIND: ValueKind;

    /// Borrow the typed value out of a calendar value of the same kind
    fn from_value(value: &CalendarValue) -> Option<&Self>;
}

/// A value that records which calendar system its fields are expressed in
pub trait HasCalendar {
    fn calendar(&self) -> CalendarSystem;
}

macro_rules! calendar_values {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Tag for each supported calendar value type
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ValueKind {
            $($variant,)+
        }

        impl ValueKind {
            /// Every kind, in declaration order
            pub const ALL: &'static [ValueKind] = &[$(ValueKind::$variant,)+];

            /// Type name used in diagnostics and structure type tags
            pub fn name(&self) -> &'static str {
                match self {
                    $(ValueKind::$variant => $name,)+
                }
            }
        }

        /// Closed union over every supported calendar value type
        #[derive(Debug, Clone, PartialEq)]
        pub enum CalendarValue {
            $($variant($variant),)+
        }

        impl CalendarValue {
            pub fn kind(&self) -> ValueKind {
                match self {
                    $(CalendarValue::$variant(_) => ValueKind::$variant,)+
                }
            }
        }

        impl fmt::Display for CalendarValue {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(CalendarValue::$variant(v) => fmt::Display::fmt(v, f),)+
                }
            }
        }

        $(
            impl From<$variant> for CalendarValue {
                fn from(value: $variant) -> Self {
                    CalendarValue::$variant(value)
                }
            }

            impl From<$variant> for LogValue {
                fn from(value: $variant) -> Self {
                    LogValue::Calendar(CalendarValue::$variant(value))
                }
            }

            impl CalendarType for $variant {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_value(value: &CalendarValue) -> Option<&Self> {
                    match value {
                        CalendarValue::$variant(v) => Some(v),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}

calendar_values! {
    Instant => "Instant",
    Offset => "Offset",
    CalendarSystem => "CalendarSystem",
    LocalDate => "LocalDate",
    LocalTime => "LocalTime",
    LocalDateTime => "LocalDateTime",
    OffsetDate => "OffsetDate",
    OffsetTime => "OffsetTime",
    OffsetDateTime => "OffsetDateTime",
    DateTimeZone => "DateTimeZone",
    ZonedDateTime => "ZonedDateTime",
    Duration => "Duration",
    Period => "Period",
    YearMonth => "YearMonth",
    Interval => "Interval",
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write a year as at least four digits, with a leading `-` before year zero
pub(crate) fn write_year(out: &mut String, year: i32) {
    if year < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:04}", year.unsigned_abs()));
}

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// `chrono` marks a leap second with a nanosecond field of one second or more
pub(crate) fn is_leap_second<T: Timelike>(value: &T) -> bool {
    value.nanosecond() >= NANOS_PER_SECOND
}

/// Fold a leap second back into the second it extends
///
/// Calendar values never hold a leap second, so every value has exactly one
/// canonical text.
pub(crate) fn without_leap_second<T: Timelike>(value: T) -> T {
    if !is_leap_second(&value) {
        return value;
    }
    let nanos = value.nanosecond() - NANOS_PER_SECOND;
    value.with_nanosecond(nanos).unwrap_or(value)
}

/// Write `.` followed by the significant digits of a nanosecond fraction
///
/// Nothing is written for a whole second. `nanos` is below one second since
/// calendar values hold no leap seconds.
pub(crate) fn write_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let digits = format!("{:09}", nanos);
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}
