//! Time zones, zone providers and zoned date-times

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{CalendarSystem, HasCalendar, Instant, LocalDateTime, Offset};
use crate::destructure::pattern::write_zoned;

/// Identifier of the zone every provider must supply
pub const UTC_ID: &str = "UTC";

/// A named time zone
///
/// Zones here map every instant to a single offset; the identifier is what
/// appears in logs and what a [`ZoneProvider`] resolves again later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimeZone {
    id: Arc<str>,
    offset: Offset,
}

impl DateTimeZone {
    pub fn fixed(id: impl Into<Arc<str>>, offset: Offset) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }

    pub fn utc() -> Self {
        Self::fixed(UTC_ID, Offset::ZERO)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset in force at the given instant
    pub fn offset_at(&self, _instant: &Instant) -> Offset {
        self.offset
    }
}

impl fmt::Display for DateTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Source of time zones keyed by identifier
///
/// A provider is created once and shared for the lifetime of a logger, so
/// implementations must tolerate concurrent lookups.
pub trait ZoneProvider: Send + Sync {
    /// Version of the underlying zone data
    fn version_id(&self) -> &str;

    /// Identifiers of every zone this provider can resolve
    fn ids(&self) -> Vec<String>;

    fn get_zone(&self, id: &str) -> Option<DateTimeZone>;
}

/// In-memory provider of fixed-offset zones
///
/// # Example
///
/// ```
/// use rust_logger_calendar::calendar::{FixedZoneProvider, Offset, ZoneProvider};
///
/// let provider = FixedZoneProvider::new()
///     .with_zone("Australia/Canberra", Offset::from_hours(11).unwrap());
///
/// assert!(provider.get_zone("UTC").is_some());
/// assert_eq!(provider.get_zone("Australia/Canberra").unwrap().id(), "Australia/Canberra");
/// ```
#[derive(Debug, Clone)]
pub struct FixedZoneProvider {
    version: String,
    zones: BTreeMap<String, Offset>,
}

impl FixedZoneProvider {
    /// Provider holding only the UTC zone
    pub fn new() -> Self {
        Self::empty().with_zone(UTC_ID, Offset::ZERO)
    }

    /// Provider with no zones at all
    pub fn empty() -> Self {
        Self {
            version: "fixed".to_string(),
            zones: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_zone(mut self, id: impl Into<String>, offset: Offset) -> Self {
        self.zones.insert(id.into(), offset);
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for FixedZoneProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneProvider for FixedZoneProvider {
    fn version_id(&self) -> &str {
        &self.version
    }

    fn ids(&self) -> Vec<String> {
        self.zones.keys().cloned().collect()
    }

    fn get_zone(&self, id: &str) -> Option<DateTimeZone> {
        self.zones
            .get(id)
            .map(|offset| DateTimeZone::fixed(id, *offset))
    }
}

/// A local date-time in a specific time zone, with the offset it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    zone: DateTimeZone,
    offset: Offset,
}

impl ZonedDateTime {
    pub fn new(local: LocalDateTime, zone: DateTimeZone) -> Self {
        let offset = zone.offset;
        Self { local, zone, offset }
    }

    /// The local date-time observed in `zone` at `instant`
    pub fn from_instant(instant: &Instant, zone: DateTimeZone) -> Option<Self> {
        let offset = zone.offset_at(instant);
        let local = instant
            .as_datetime()
            .naive_utc()
            .checked_add_signed(chrono::TimeDelta::seconds(i64::from(offset.seconds())))?;
        Some(Self {
            local: LocalDateTime::from(local),
            zone,
            offset,
        })
    }

    pub fn local(&self) -> &LocalDateTime {
        &self.local
    }

    pub fn zone(&self) -> &DateTimeZone {
        &self.zone
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn to_instant(&self) -> Option<Instant> {
        let utc = self
            .local
            .as_naive()
            .checked_sub_signed(chrono::TimeDelta::seconds(i64::from(self.offset.seconds())))?;
        Some(Instant::from(utc.and_utc()))
    }
}

impl HasCalendar for ZonedDateTime {
    fn calendar(&self) -> CalendarSystem {
        self.local.calendar()
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(48);
        write_zoned(&mut out, self);
        f.write_str(&out)
    }
}
