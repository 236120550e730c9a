//! Property values carried by log events
//!
//! This module provides:
//! - `ScalarValue`: a single indivisible value
//! - `PropertyValue`: a scalar or a structure of named properties
//! - `LogValue`: what callers hand to the logger before conversion

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::CalendarValue;

/// Value type for scalar properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "{}", s),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Float(fl) => write!(f, "{}", fl),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Null => write!(f, "null"),
        }
    }
}

impl ScalarValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            ScalarValue::String(s) => serde_json::Value::String(s.clone()),
            ScalarValue::Int(i) => serde_json::Value::Number((*i).into()),
            ScalarValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ScalarValue::Bool(b) => serde_json::Value::Bool(*b),
            ScalarValue::Null => serde_json::Value::Null,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int(i)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Int(i as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

/// A named property value
#[derive(Debug, Clone, PartialEq)]
pub struct LogEventProperty {
    pub name: String,
    pub value: PropertyValue,
}

impl LogEventProperty {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An ordered list of named properties, optionally tagged with a type name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureValue {
    pub type_tag: Option<String>,
    pub properties: Vec<LogEventProperty>,
}

impl StructureValue {
    pub fn new(properties: Vec<LogEventProperty>) -> Self {
        Self {
            type_tag: None,
            properties,
        }
    }

    pub fn tagged(type_tag: impl Into<String>, properties: Vec<LogEventProperty>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            properties,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// The loggable form of a value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(ScalarValue),
    Structure(StructureValue),
}

impl PropertyValue {
    pub fn scalar(value: impl Into<ScalarValue>) -> Self {
        PropertyValue::Scalar(value.into())
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::Structure(_) => None,
        }
    }

    pub fn as_structure(&self) -> Option<&StructureValue> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::Structure(s) => Some(s),
        }
    }

    /// Convert to serde_json::Value; structures become objects with an
    /// optional `$type` member
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            PropertyValue::Scalar(s) => s.to_json_value(),
            PropertyValue::Structure(s) => {
                let mut map = serde_json::Map::new();
                if let Some(ref tag) = s.type_tag {
                    map.insert("$type".to_string(), serde_json::Value::String(tag.clone()));
                }
                for property in &s.properties {
                    map.insert(property.name.clone(), property.value.to_json_value());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(s) => write!(f, "{}", s),
            PropertyValue::Structure(s) => {
                if let Some(ref tag) = s.type_tag {
                    write!(f, "{} ", tag)?;
                }
                if s.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, property) in s.properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", property.name, property.value)?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// A value handed to the logger, before conversion to a [`PropertyValue`]
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Scalar(ScalarValue),
    Calendar(CalendarValue),
}

macro_rules! scalar_log_values {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    LogValue::Scalar(value.into())
                }
            }
        )+
    };
}

scalar_log_values!(ScalarValue, String, &str, i64, i32, f64, bool);

impl From<CalendarValue> for LogValue {
    fn from(value: CalendarValue) -> Self {
        LogValue::Calendar(value)
    }
}

/// An optional value is unwrapped once; `None` logs as null
impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogValue::Scalar(ScalarValue::Null), Into::into)
    }
}

impl LogValue {
    /// Wrap any calendar value type
    pub fn calendar(value: impl Into<CalendarValue>) -> Self {
        LogValue::Calendar(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_json() {
        let structure = PropertyValue::Structure(StructureValue::new(vec![
            LogEventProperty::new("start", PropertyValue::scalar("a")),
            LogEventProperty::new("end", PropertyValue::scalar(2)),
        ]));

        let json = structure.to_json_value();
        assert_eq!(json["start"], "a");
        assert_eq!(json["end"], 2);
        assert!(json.get("$type").is_none());
    }

    #[test]
    fn test_tagged_structure_json() {
        let structure = PropertyValue::Structure(StructureValue::tagged("Offset", vec![
            LogEventProperty::new("seconds", PropertyValue::scalar(3720)),
        ]));

        let json = structure.to_json_value();
        assert_eq!(json["$type"], "Offset");
        assert_eq!(json["seconds"], 3720);
    }

    #[test]
    fn test_structure_display() {
        let empty = PropertyValue::Structure(StructureValue::default());
        assert_eq!(empty.to_string(), "{}");

        let structure = PropertyValue::Structure(StructureValue::new(vec![
            LogEventProperty::new("start", PropertyValue::scalar("1970-01-01T00:00:00Z")),
        ]));
        assert_eq!(structure.to_string(), "{ start: 1970-01-01T00:00:00Z }");
    }

    #[test]
    fn test_optional_unwraps_once() {
        assert_eq!(LogValue::from(None::<i64>), LogValue::Scalar(ScalarValue::Null));
        assert_eq!(LogValue::from(Some(5)), LogValue::Scalar(ScalarValue::Int(5)));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(ScalarValue::Float(f64::NAN).to_json_value(), serde_json::Value::Null);
    }
}
