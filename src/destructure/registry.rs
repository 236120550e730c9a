//! Ordered policy registry and value conversion

use std::fmt;
use std::sync::Arc;

use super::{DestructuringPolicy, PropertyValueFactory};
use crate::calendar::{CalendarValue, HasCalendar, LocalDateTime, Offset, ValueKind};
use crate::core::error::Result;
use crate::core::property_value::{
    LogEventProperty, LogValue, PropertyValue, ScalarValue, StructureValue,
};

/// Destructuring configuration: ordered policies plus opaque-scalar markers
///
/// A registry is a plain value. Every `with_*` call consumes it and returns
/// the extended registry, and at most one policy is held per value kind.
#[derive(Clone, Default)]
pub struct Destructure {
    policies: Vec<Arc<dyn DestructuringPolicy>>,
    scalar_kinds: Vec<ValueKind>,
}

impl Destructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a policy, replacing any policy already bound to its kind
    #[must_use = "builder methods return a new value"]
    pub fn with_policy<P: DestructuringPolicy + 'static>(self, policy: P) -> Self {
        self.with_shared_policy(Arc::new(policy))
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_shared_policy(mut self, policy: Arc<dyn DestructuringPolicy>) -> Self {
        let kind = policy.kind();
        match self.policies.iter_mut().find(|p| p.kind() == kind) {
            Some(existing) => *existing = policy,
            None => self.policies.push(policy),
        }
        self
    }

    /// Always log values of `kind` as a single scalar of their text form
    #[must_use = "builder methods return a new value"]
    pub fn as_scalar(mut self, kind: ValueKind) -> Self {
        if !self.scalar_kinds.contains(&kind) {
            self.scalar_kinds.push(kind);
        }
        self
    }

    pub fn is_scalar(&self, kind: ValueKind) -> bool {
        self.scalar_kinds.contains(&kind)
    }

    pub fn scalar_kinds(&self) -> &[ValueKind] {
        &self.scalar_kinds
    }

    /// Kinds with a registered policy, in registration order
    pub fn policy_kinds(&self) -> Vec<ValueKind> {
        self.policies.iter().map(|p| p.kind()).collect()
    }

    pub fn policies(&self) -> &[Arc<dyn DestructuringPolicy>] {
        &self.policies
    }

    /// Number of registered policies, not counting opaque-scalar kinds
    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty() && self.scalar_kinds.is_empty()
    }

    /// Offer a calendar value to each policy in order
    ///
    /// Returns `Ok(None)` when no policy claims the value. The first error
    /// stops the search.
    pub fn try_policies(&self, value: &CalendarValue) -> Result<Option<PropertyValue>> {
        for policy in &self.policies {
            if let Some(result) = policy.try_destructure(value, self)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn convert_calendar(&self, value: &CalendarValue, destructure: bool) -> Result<PropertyValue> {
        if self.is_scalar(value.kind()) || !destructure {
            return Ok(PropertyValue::scalar(value.to_string()));
        }
        match self.try_policies(value)? {
            Some(result) => Ok(result),
            None => Ok(PropertyValue::Structure(dump(value))),
        }
    }
}

impl PropertyValueFactory for Destructure {
    fn create_property_value(&self, value: &LogValue, destructure: bool) -> Result<PropertyValue> {
        match value {
            LogValue::Scalar(scalar) => Ok(PropertyValue::Scalar(scalar.clone())),
            LogValue::Calendar(calendar) => self.convert_calendar(calendar, destructure),
        }
    }
}

impl fmt::Debug for Destructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destructure")
            .field("policies", &self.policy_kinds())
            .field("scalar_kinds", &self.scalar_kinds)
            .finish()
    }
}

fn prop(name: &str, value: impl Into<ScalarValue>) -> LogEventProperty {
    LogEventProperty::new(name, PropertyValue::scalar(value))
}

fn nested(name: &str, value: StructureValue) -> LogEventProperty {
    LogEventProperty::new(name, PropertyValue::Structure(value))
}

fn offset_fields(offset: Offset) -> Vec<LogEventProperty> {
    vec![prop("Seconds", i64::from(offset.seconds()))]
}

fn local_fields(local: &LocalDateTime) -> Vec<LogEventProperty> {
    let date = local.date();
    let time = local.time();
    vec![
        prop("Year", date.year()),
        prop("Month", i64::from(date.month())),
        prop("Day", i64::from(date.day())),
        prop("Hour", i64::from(time.hour())),
        prop("Minute", i64::from(time.minute())),
        prop("Second", i64::from(time.second())),
        prop("NanosecondOfSecond", i64::from(time.nanosecond())),
        prop("Calendar", local.calendar().id()),
    ]
}

/// Raw component dump used when no policy claims a value
fn dump(value: &CalendarValue) -> StructureValue {
    let properties = match value {
        CalendarValue::Instant(v) => vec![
            prop("UnixSeconds", v.unix_seconds()),
            prop("NanosecondOfSecond", i64::from(v.nanosecond())),
        ],
        CalendarValue::Offset(v) => offset_fields(*v),
        CalendarValue::CalendarSystem(v) => vec![prop("Id", v.id())],
        CalendarValue::LocalDate(v) => vec![
            prop("Year", v.year()),
            prop("Month", i64::from(v.month())),
            prop("Day", i64::from(v.day())),
            prop("Calendar", v.calendar().id()),
        ],
        CalendarValue::LocalTime(v) => vec![
            prop("Hour", i64::from(v.hour())),
            prop("Minute", i64::from(v.minute())),
            prop("Second", i64::from(v.second())),
            prop("NanosecondOfSecond", i64::from(v.nanosecond())),
        ],
        CalendarValue::LocalDateTime(v) => local_fields(v),
        CalendarValue::OffsetDate(v) => vec![
            nested("Date", dump(&CalendarValue::LocalDate(*v.date()))),
            nested("Offset", StructureValue::tagged("Offset", offset_fields(v.offset()))),
        ],
        CalendarValue::OffsetTime(v) => vec![
            nested("TimeOfDay", dump(&CalendarValue::LocalTime(*v.time()))),
            nested("Offset", StructureValue::tagged("Offset", offset_fields(v.offset()))),
        ],
        CalendarValue::OffsetDateTime(v) => vec![
            nested("LocalDateTime", StructureValue::tagged("LocalDateTime", local_fields(v.local()))),
            nested("Offset", StructureValue::tagged("Offset", offset_fields(v.offset()))),
        ],
        CalendarValue::DateTimeZone(v) => vec![prop("Id", v.id())],
        CalendarValue::ZonedDateTime(v) => vec![
            nested("LocalDateTime", StructureValue::tagged("LocalDateTime", local_fields(v.local()))),
            nested("Offset", StructureValue::tagged("Offset", offset_fields(v.offset()))),
            prop("Zone", v.zone().id()),
        ],
        CalendarValue::Duration(v) => {
            let delta = v.as_time_delta();
            vec![
                prop("Seconds", delta.num_seconds()),
                prop("SubsecondNanoseconds", i64::from(delta.subsec_nanos())),
            ]
        }
        CalendarValue::Period(v) => vec![
            prop("Years", v.years),
            prop("Months", v.months),
            prop("Weeks", v.weeks),
            prop("Days", v.days),
            prop("Hours", v.hours),
            prop("Minutes", v.minutes),
            prop("Seconds", v.seconds),
            prop("Milliseconds", v.milliseconds),
            prop("Ticks", v.ticks),
            prop("Nanoseconds", v.nanoseconds),
        ],
        CalendarValue::YearMonth(v) => vec![
            prop("Year", v.year()),
            prop("Month", i64::from(v.month())),
            prop("Calendar", v.calendar().id()),
        ],
        CalendarValue::Interval(v) => {
            let mut properties = vec![prop("HasStart", v.has_start()), prop("HasEnd", v.has_end())];
            if let Some(start) = v.start() {
                properties.push(nested("Start", dump(&CalendarValue::Instant(*start))));
            }
            if let Some(end) = v.end() {
                properties.push(nested("End", dump(&CalendarValue::Instant(*end))));
            }
            properties
        }
    };
    StructureValue::tagged(value.kind().name(), properties)
}
