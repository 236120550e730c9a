//! Interval destructuring

use super::{DestructuringPolicy, PropertyValueFactory};
use crate::calendar::{CalendarType, CalendarValue, Instant, Interval, ValueKind};
use crate::core::error::Result;
use crate::core::property_value::{LogEventProperty, LogValue, PropertyValue, StructureValue};

/// Writes an interval as a structure holding whichever bounds it has
///
/// Each bound is converted through the factory, so it is formatted exactly as
/// a lone instant would be. An interval with neither bound becomes an empty
/// structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalPolicy;

impl IntervalPolicy {
    pub fn new() -> Self {
        Self
    }

    fn bound(
        name: &str,
        instant: Option<&Instant>,
        factory: &dyn PropertyValueFactory,
    ) -> Result<Option<LogEventProperty>> {
        match instant {
            Some(instant) => {
                let value = factory.create_property_value(&LogValue::calendar(*instant), true)?;
                Ok(Some(LogEventProperty::new(name, value)))
            }
            None => Ok(None),
        }
    }
}

impl DestructuringPolicy for IntervalPolicy {
    fn kind(&self) -> ValueKind {
        Interval::KIND
    }

    fn try_destructure(
        &self,
        value: &CalendarValue,
        factory: &dyn PropertyValueFactory,
    ) -> Result<Option<PropertyValue>> {
        let Some(interval) = Interval::from_value(value) else {
            return Ok(None);
        };

        let properties = [
            Self::bound("start", interval.start(), factory)?,
            Self::bound("end", interval.end(), factory)?,
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(Some(PropertyValue::Structure(StructureValue::new(properties))))
    }
}
