//! Canonical text patterns for calendar values
//!
//! Every pattern here is culture-invariant and deterministic. Where the value
//! space allows it the text is lossless, so a parser for the same pattern can
//! rebuild the original value.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::sync::Arc;

use crate::calendar::{
    write_fraction, write_year, CalendarSystem, DateTimeZone, Duration, Instant, LocalDate,
    LocalDateTime, LocalTime, Offset, OffsetDate, OffsetDateTime, OffsetTime, Period, YearMonth,
    ZoneProvider, ZonedDateTime,
};

const SECONDS_PER_DAY: u64 = 86_400;

/// A fixed formatting rule for one value type
pub trait Pattern<T>: Send + Sync {
    fn format(&self, value: &T) -> String;
}

/// `uuuu-MM-dd`
fn write_date(out: &mut String, date: &NaiveDate) {
    write_year(out, date.year());
    out.push_str(&format!("-{:02}-{:02}", date.month(), date.day()));
}

/// `HH:mm:ss;FFFFFFFFF`
fn write_time(out: &mut String, time: &NaiveTime) {
    out.push_str(&format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    ));
    write_fraction(out, time.nanosecond());
}

fn write_date_time(out: &mut String, datetime: &NaiveDateTime) {
    write_date(out, &datetime.date());
    out.push('T');
    write_time(out, &datetime.time());
}

/// The general invariant patterns: extended ISO instants in UTC and the
/// shortest exact offset form
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralPattern;

impl Pattern<Instant> for GeneralPattern {
    fn format(&self, value: &Instant) -> String {
        let mut out = String::with_capacity(30);
        write_date_time(&mut out, &value.as_datetime().naive_utc());
        out.push('Z');
        out
    }
}

impl Pattern<Offset> for GeneralPattern {
    fn format(&self, value: &Offset) -> String {
        let mut out = String::with_capacity(9);
        value.write_general(&mut out);
        out
    }
}

/// Extended ISO-8601 patterns for local values and values with an offset
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoPattern;

impl Pattern<LocalDate> for IsoPattern {
    fn format(&self, value: &LocalDate) -> String {
        let mut out = String::with_capacity(10);
        write_date(&mut out, value.as_naive());
        out
    }
}

impl Pattern<LocalTime> for IsoPattern {
    fn format(&self, value: &LocalTime) -> String {
        let mut out = String::with_capacity(18);
        write_time(&mut out, value.as_naive());
        out
    }
}

impl Pattern<LocalDateTime> for IsoPattern {
    fn format(&self, value: &LocalDateTime) -> String {
        let mut out = String::with_capacity(29);
        write_date_time(&mut out, value.as_naive());
        out
    }
}

impl Pattern<YearMonth> for IsoPattern {
    fn format(&self, value: &YearMonth) -> String {
        let mut out = String::with_capacity(7);
        write_year(&mut out, value.year());
        out.push_str(&format!("-{:02}", value.month()));
        out
    }
}

impl Pattern<OffsetDate> for IsoPattern {
    fn format(&self, value: &OffsetDate) -> String {
        let mut out = String::with_capacity(19);
        write_date(&mut out, value.date().as_naive());
        value.offset().write_general_or_z(&mut out);
        out
    }
}

impl Pattern<OffsetTime> for IsoPattern {
    fn format(&self, value: &OffsetTime) -> String {
        let mut out = String::with_capacity(27);
        write_time(&mut out, value.time().as_naive());
        value.offset().write_general_or_z(&mut out);
        out
    }
}

/// RFC 3339 date-times: `Z` for UTC, otherwise `+HH:mm`
///
/// Offsets with a seconds component carry `:ss` as well, since dropping it
/// would change the instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Pattern;

impl Pattern<OffsetDateTime> for Rfc3339Pattern {
    fn format(&self, value: &OffsetDateTime) -> String {
        let mut out = String::with_capacity(35);
        write_date_time(&mut out, value.local().as_naive());

        let offset = value.offset();
        if offset == Offset::ZERO {
            out.push('Z');
            return out;
        }
        let (sign, hours, minutes, seconds) = offset.parts();
        out.push(sign);
        out.push_str(&format!("{:02}:{:02}", hours, minutes));
        if seconds != 0 {
            out.push_str(&format!(":{:02}", seconds));
        }
        out
    }
}

/// Round-trip patterns for elapsed time and calendar periods
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundtripPattern;

impl Pattern<Duration> for RoundtripPattern {
    /// `-D:hh:mm:ss;FFFFFFFFF`
    fn format(&self, value: &Duration) -> String {
        let (total_seconds, nanos) = value.abs_parts();
        let days = total_seconds / SECONDS_PER_DAY;
        let rest = total_seconds % SECONDS_PER_DAY;

        let mut out = String::with_capacity(24);
        if value.is_negative() {
            out.push('-');
        }
        out.push_str(&format!(
            "{}:{:02}:{:02}:{:02}",
            days,
            rest / 3_600,
            (rest / 60) % 60,
            rest % 60
        ));
        write_fraction(&mut out, nanos);
        out
    }
}

impl Pattern<Period> for RoundtripPattern {
    fn format(&self, value: &Period) -> String {
        let mut out = String::from("P");
        let date_units = [
            (i64::from(value.years), 'Y'),
            (i64::from(value.months), 'M'),
            (i64::from(value.weeks), 'W'),
            (i64::from(value.days), 'D'),
        ];
        for (amount, unit) in date_units {
            if amount != 0 {
                out.push_str(&format!("{}{}", amount, unit));
            }
        }

        if value.has_time_component() {
            out.push('T');
            let time_units = [
                (value.hours, 'H'),
                (value.minutes, 'M'),
                (value.seconds, 'S'),
                (value.milliseconds, 's'),
                (value.ticks, 't'),
                (value.nanoseconds, 'n'),
            ];
            for (amount, unit) in time_units {
                if amount != 0 {
                    out.push_str(&format!("{}{}", amount, unit));
                }
            }
        }
        out
    }
}

/// Raw identifiers for values that are fully named by their id
#[derive(Debug, Clone, Copy, Default)]
pub struct IdPattern;

impl Pattern<CalendarSystem> for IdPattern {
    fn format(&self, value: &CalendarSystem) -> String {
        value.id().to_string()
    }
}

impl Pattern<DateTimeZone> for IdPattern {
    fn format(&self, value: &DateTimeZone) -> String {
        value.id().to_string()
    }
}

/// `uuuu-MM-ddTHH:mm:ss;FFFFFFFFF` + offset + space + zone id
pub(crate) fn write_zoned(out: &mut String, value: &ZonedDateTime) {
    write_date_time(out, value.local().as_naive());
    value.offset().write_general_or_z(out);
    out.push(' ');
    out.push_str(value.zone().id());
}

/// Zoned date-time pattern bound to the provider that resolves its zone ids
///
/// Both the offset and the zone id are written. The offset fixes the instant
/// even if the provider's rules change later, while the id lets a reader
/// resolve the zone again through the same provider.
#[derive(Clone)]
pub struct ZonedDateTimePattern {
    provider: Arc<dyn ZoneProvider>,
}

impl ZonedDateTimePattern {
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn ZoneProvider> {
        &self.provider
    }

    /// Look up the zone named at the end of a formatted value
    pub fn resolve_zone(&self, text: &str) -> Option<DateTimeZone> {
        let (_, id) = text.split_once(' ')?;
        self.provider.get_zone(id)
    }
}

impl fmt::Debug for ZonedDateTimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZonedDateTimePattern")
            .field("provider", &self.provider.version_id())
            .finish()
    }
}

impl Pattern<ZonedDateTime> for ZonedDateTimePattern {
    fn format(&self, value: &ZonedDateTime) -> String {
        let mut out = String::with_capacity(48);
        write_zoned(&mut out, value);
        out
    }
}
