//! Policies that format a value through a fixed pattern

use std::fmt;
use std::sync::Arc;

use super::pattern::{
    GeneralPattern, IdPattern, IsoPattern, Pattern, Rfc3339Pattern, RoundtripPattern,
    ZonedDateTimePattern,
};
use super::{DestructuringPolicy, PropertyValueFactory};
use crate::calendar::{
    CalendarSystem, CalendarType, CalendarValue, DateTimeZone, Duration, HasCalendar, Instant,
    LocalDate, LocalDateTime, LocalTime, Offset, OffsetDate, OffsetDateTime, OffsetTime, Period,
    ValueKind, YearMonth, ZoneProvider, ZonedDateTime,
};
use crate::core::error::{LoggerError, Result};
use crate::core::property_value::PropertyValue;

/// Precondition checked before a value is formatted
pub type Validator<T> = fn(&T) -> Result<()>;

/// Reject values outside the ISO calendar
///
/// The canonical patterns do not record the calendar system, so formatting a
/// value from another calendar would silently lose it.
pub fn require_iso<T: CalendarType + HasCalendar>(value: &T) -> Result<()> {
    if value.calendar().is_iso() {
        Ok(())
    } else {
        Err(LoggerError::invalid_data(format!(
            "Values of type {} must (currently) use the ISO calendar in order to be serialized.",
            T::KIND.name()
        )))
    }
}

/// Binds one value type to a pattern and an optional validator
pub struct PatternPolicy<T> {
    pattern: Arc<dyn Pattern<T>>,
    validator: Option<Validator<T>>,
}

impl<T: CalendarType> PatternPolicy<T> {
    pub fn from_pattern(pattern: impl Pattern<T> + 'static) -> Self {
        Self {
            pattern: Arc::new(pattern),
            validator: None,
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Format a value of the bound type, running the validator first
    pub fn format(&self, value: &T) -> Result<String> {
        if let Some(validate) = self.validator {
            validate(value)?;
        }
        Ok(self.pattern.format(value))
    }
}

impl<T: CalendarType + HasCalendar> PatternPolicy<T> {
    #[must_use]
    pub fn iso_only(self) -> Self {
        self.with_validator(require_iso::<T>)
    }
}

impl<T> Clone for PatternPolicy<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: Arc::clone(&self.pattern),
            validator: self.validator,
        }
    }
}

impl<T: CalendarType> fmt::Debug for PatternPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternPolicy")
            .field("kind", &T::KIND)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

impl<T> DestructuringPolicy for PatternPolicy<T>
where
    T: CalendarType + Send + Sync + 'static,
{
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn try_destructure(
        &self,
        value: &CalendarValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Result<Option<PropertyValue>> {
        match T::from_value(value) {
            Some(typed) => self.format(typed).map(|text| Some(PropertyValue::scalar(text))),
            None => Ok(None),
        }
    }
}

macro_rules! pattern_policies {
    ($($(#[$doc:meta])* $alias:ident => $ty:ty, $pattern:expr $(, $gate:ident)?;)+) => {
        $(
            $(#[$doc])*
            pub type $alias = PatternPolicy<$ty>;

            impl PatternPolicy<$ty> {
                pub fn new() -> Self {
                    Self::from_pattern($pattern)$(.$gate())?
                }
            }

            impl Default for PatternPolicy<$ty> {
                fn default() -> Self {
                    Self::new()
                }
            }
        )+
    };
}

pattern_policies! {
    /// Extended ISO instant in UTC, fraction kept
    InstantPolicy => Instant, GeneralPattern;
    /// Shortest exact offset, e.g. `+01:02`
    OffsetPolicy => Offset, GeneralPattern;
    CalendarSystemPolicy => CalendarSystem, IdPattern;
    LocalDatePolicy => LocalDate, IsoPattern, iso_only;
    LocalTimePolicy => LocalTime, IsoPattern, iso_only;
    LocalDateTimePolicy => LocalDateTime, IsoPattern, iso_only;
    OffsetDatePolicy => OffsetDate, IsoPattern, iso_only;
    OffsetTimePolicy => OffsetTime, IsoPattern, iso_only;
    OffsetDateTimePolicy => OffsetDateTime, Rfc3339Pattern, iso_only;
    /// Zone identifier; resolving it again needs a zone provider
    DateTimeZonePolicy => DateTimeZone, IdPattern;
    DurationPolicy => Duration, RoundtripPattern;
    PeriodPolicy => Period, RoundtripPattern;
    YearMonthPolicy => YearMonth, IsoPattern, iso_only;
}

/// Zoned date-time policy; its pattern is bound to a zone provider
pub type ZonedDateTimePolicy = PatternPolicy<ZonedDateTime>;

impl PatternPolicy<ZonedDateTime> {
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self::from_pattern(ZonedDateTimePattern::new(provider)).iso_only()
    }
}
