//! Shared helpers for integration tests
//!
//! Parsers for the canonical text forms, built on `chrono`, so tests can
//! check that logged values rebuild the originals.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_logger_calendar::prelude::*;
use std::sync::Arc;

pub const CANBERRA: &str = "Australia/Canberra";

pub fn provider() -> Arc<dyn ZoneProvider> {
    Arc::new(
        FixedZoneProvider::new()
            .with_zone(CANBERRA, Offset::from_hours(11).unwrap())
            .with_zone("Europe/London", Offset::ZERO)
            .with_zone("America/St_Johns", Offset::from_hours_and_minutes(-3, -30).unwrap()),
    )
}

/// A logger with every calendar policy, writing to the returned memory appender
pub fn calendar_logger() -> (Logger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = LoggerConfiguration::new()
        .min_level(LogLevel::Verbose)
        .configure_for_calendar(provider())
        .unwrap()
        .appender(memory.clone())
        .create_logger();
    (logger, memory)
}

/// Log `value` destructured under the name `Value` and return the compact
/// JSON the event renders to
pub fn log_and_render(value: impl Into<LogValue>) -> serde_json::Value {
    let (logger, memory) = calendar_logger();
    logger
        .information_builder()
        .message("Round trip")
        .destructure("Value", value)
        .try_log()
        .unwrap();

    let lines = memory.render(OutputFormat::CompactJson);
    assert_eq!(lines.len(), 1);
    let event: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    event["Value"].clone()
}

/// The logged text of a value that must have been written as a scalar string
pub fn logged_text(value: impl Into<LogValue>) -> String {
    match log_and_render(value) {
        serde_json::Value::String(s) => s,
        other => panic!("expected a string, got {}", other),
    }
}

fn split_fraction(s: &str) -> (&str, u32) {
    match s.split_once('.') {
        Some((whole, fraction)) => {
            assert!(!fraction.is_empty() && fraction.len() <= 9, "bad fraction {:?}", fraction);
            assert!(!fraction.ends_with('0'), "fraction {:?} has trailing zeros", fraction);
            let padded = format!("{:0<9}", fraction);
            (whole, padded.parse().unwrap())
        }
        None => (s, 0),
    }
}

pub fn parse_year(s: &str) -> i32 {
    let digits = s.strip_prefix('-').unwrap_or(s);
    assert!(digits.len() >= 4, "year {:?} is not zero padded", s);
    s.parse().unwrap()
}

pub fn parse_date(s: &str) -> NaiveDate {
    let mut parts = s.rsplitn(3, '-');
    let day = parts.next().unwrap().parse().unwrap();
    let month = parts.next().unwrap().parse().unwrap();
    let year = parse_year(parts.next().unwrap());
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn parse_time(s: &str) -> NaiveTime {
    let (whole, nanos) = split_fraction(s);
    let fields: Vec<u32> = whole.split(':').map(|f| f.parse().unwrap()).collect();
    assert_eq!(fields.len(), 3, "time {:?}", s);
    NaiveTime::from_hms_nano_opt(fields[0], fields[1], fields[2], nanos).unwrap()
}

pub fn parse_local_date_time(s: &str) -> NaiveDateTime {
    let (date, time) = s.split_once('T').unwrap();
    NaiveDateTime::new(parse_date(date), parse_time(time))
}

/// `Z` or `+HH`, `+HH:mm`, `+HH:mm:ss`
pub fn parse_offset(s: &str) -> Offset {
    if s == "Z" {
        return Offset::ZERO;
    }
    let (sign, rest) = match s.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => panic!("bad offset {:?}", s),
    };
    let fields: Vec<i32> = rest.split(':').map(|f| f.parse().unwrap()).collect();
    let seconds = fields[0] * 3600 + fields.get(1).unwrap_or(&0) * 60 + fields.get(2).unwrap_or(&0);
    Offset::from_seconds(sign * seconds).unwrap()
}

/// Split `...<offset>` where the offset starts at the first `Z`, `+` or `-`
/// after `from`
fn split_offset(s: &str, from: usize) -> (&str, &str) {
    let at = s[from..]
        .find(&['Z', '+', '-'][..])
        .map(|i| i + from)
        .unwrap_or_else(|| panic!("no offset in {:?}", s));
    s.split_at(at)
}

fn date_len(s: &str) -> usize {
    if s.starts_with('-') {
        11
    } else {
        10
    }
}

pub fn parse_instant(s: &str) -> Instant {
    let local = s.strip_suffix('Z').unwrap();
    Instant::from(parse_local_date_time(local).and_utc())
}

pub fn parse_local_date(s: &str) -> LocalDate {
    LocalDate::from(parse_date(s))
}

pub fn parse_local_time(s: &str) -> LocalTime {
    LocalTime::from(parse_time(s))
}

pub fn parse_year_month(s: &str) -> YearMonth {
    let (year, month) = s.rsplit_once('-').unwrap();
    YearMonth::new(parse_year(year), month.parse().unwrap()).unwrap()
}

pub fn parse_offset_date(s: &str) -> OffsetDate {
    let (date, offset) = s.split_at(date_len(s));
    OffsetDate::new(parse_local_date(date), parse_offset(offset))
}

pub fn parse_offset_time(s: &str) -> OffsetTime {
    let (time, offset) = split_offset(s, 0);
    OffsetTime::new(parse_local_time(time), parse_offset(offset))
}

pub fn parse_offset_date_time(s: &str) -> OffsetDateTime {
    let (local, offset) = split_offset(s, date_len(s));
    OffsetDateTime::new(
        LocalDateTime::from(parse_local_date_time(local)),
        parse_offset(offset),
    )
}

/// Zoned values carry both the offset and the zone id; the zone is resolved
/// through the provider and must agree with the offset
pub fn parse_zoned_date_time(s: &str, provider: &dyn ZoneProvider) -> ZonedDateTime {
    let (with_offset, id) = s.split_once(' ').unwrap();
    let parsed = parse_offset_date_time(with_offset);
    let zone = provider.get_zone(id).unwrap();
    let zoned = parsed.local().in_zone_leniently(&zone);
    assert_eq!(zoned.offset(), parsed.offset());
    zoned
}

pub fn parse_duration(s: &str) -> Duration {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, nanos) = split_fraction(rest);
    let fields: Vec<i64> = whole.split(':').map(|f| f.parse().unwrap()).collect();
    assert_eq!(fields.len(), 4, "duration {:?}", s);
    assert!(fields[1] < 24 && fields[2] < 60 && fields[3] < 60);

    let seconds = ((fields[0] * 24 + fields[1]) * 60 + fields[2]) * 60 + fields[3];
    let magnitude = TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(i64::from(nanos));
    Duration::from(if negative { -magnitude } else { magnitude })
}

pub fn parse_period(s: &str) -> Period {
    let body = s.strip_prefix('P').unwrap();
    let (date, time) = match body.split_once('T') {
        Some((date, time)) => {
            assert!(!time.is_empty(), "empty time part in {:?}", s);
            (date, time)
        }
        None => (body, ""),
    };

    let mut period = Period::ZERO;
    for (amount, unit) in tokens(date) {
        match unit {
            'Y' => period.years = amount as i32,
            'M' => period.months = amount as i32,
            'W' => period.weeks = amount as i32,
            'D' => period.days = amount as i32,
            _ => panic!("bad date unit {:?} in {:?}", unit, s),
        }
    }
    for (amount, unit) in tokens(time) {
        match unit {
            'H' => period.hours = amount,
            'M' => period.minutes = amount,
            'S' => period.seconds = amount,
            's' => period.milliseconds = amount,
            't' => period.ticks = amount,
            'n' => period.nanoseconds = amount,
            _ => panic!("bad time unit {:?} in {:?}", unit, s),
        }
    }
    period
}

fn tokens(s: &str) -> Vec<(i64, char)> {
    let mut result = Vec::new();
    let mut number = String::new();
    for c in s.chars() {
        if c == '-' || c.is_ascii_digit() {
            number.push(c);
        } else {
            result.push((number.parse().unwrap(), c));
            number.clear();
        }
    }
    assert!(number.is_empty(), "dangling number in {:?}", s);
    result
}
