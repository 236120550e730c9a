//! Property-based tests for rust_logger_calendar using proptest

mod support;

use chrono::{DateTime, NaiveDate};
use proptest::prelude::*;
use rust_logger_calendar::destructure::{
    DurationPolicy, InstantPolicy, LocalDateTimePolicy, LocalTimePolicy, OffsetDateTimePolicy,
    PeriodPolicy,
};
use rust_logger_calendar::prelude::*;
use support::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

/// Instants between years 1 and 9999
fn any_instant() -> impl Strategy<Value = Instant> {
    (-62_135_596_800i64..253_402_300_799, 0u32..1_000_000_000)
        .prop_map(|(seconds, nanos)| Instant::from_unix_seconds(seconds, nanos).unwrap())
}

fn any_local_date_time() -> impl Strategy<Value = LocalDateTime> {
    (
        1i32..=9999,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1_000_000_000,
    )
        .prop_map(|(y, mo, d, h, mi, s, n)| {
            let naive = NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_nano_opt(h, mi, s, n)
                .unwrap();
            LocalDateTime::from(naive)
        })
}

fn any_offset() -> impl Strategy<Value = Offset> {
    (-86_399i32..=86_399).prop_map(|s| Offset::from_seconds(s).unwrap())
}

fn any_duration() -> impl Strategy<Value = Duration> {
    (-(1i64 << 62)..(1i64 << 62)).prop_map(Duration::from_nanoseconds)
}

fn any_period() -> impl Strategy<Value = Period> {
    (
        (-100i32..100, -100i32..100, -100i32..100, -1000i32..1000),
        (
            -1000i64..1000,
            -1000i64..1000,
            -1000i64..1000,
            -1000i64..1000,
            -1000i64..1000,
            -1000i64..1000,
        ),
    )
        .prop_map(|((years, months, weeks, days), (hours, minutes, seconds, ms, ticks, ns))| Period {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds: ms,
            ticks,
            nanoseconds: ns,
        })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_short_name_roundtrip(level in any_level(), lower in any::<bool>()) {
        let input = if lower {
            level.short_name().to_lowercase()
        } else {
            level.short_name().to_string()
        };
        let parsed: LogLevel = input.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a > b, (a as u8) > (b as u8));
    }

    #[test]
    fn test_log_level_invalid_parse(input in "[^a-zA-Z]*") {
        prop_assert!(input.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// LogEvent Message Sanitization Tests
// ============================================================================

proptest! {
    #[test]
    fn test_message_has_no_raw_control_characters(message in ".*") {
        let event = LogEvent::new(LogLevel::Information, &message);
        prop_assert!(!event.message.contains('\n'));
        prop_assert!(!event.message.contains('\r'));
        prop_assert!(!event.message.contains('\t'));
    }

    #[test]
    fn test_rendered_event_is_one_line(message in ".*", level in any_level()) {
        let event = LogEvent::new(level, &message);
        prop_assert_eq!(OutputFormat::Text.format(&event).lines().count(), 1);

        let json: serde_json::Value =
            serde_json::from_str(&OutputFormat::CompactJson.format(&event)).unwrap();
        prop_assert_eq!(json["@m"].as_str().unwrap(), event.message.as_str());
    }
}

// ============================================================================
// Pattern Tests
// ============================================================================

proptest! {
    #[test]
    fn test_formatting_is_deterministic(instant in any_instant(), local in any_local_date_time()) {
        let instants = InstantPolicy::new();
        prop_assert_eq!(instants.format(&instant).unwrap(), instants.format(&instant).unwrap());

        let locals = LocalDateTimePolicy::new();
        prop_assert_eq!(locals.format(&local).unwrap(), locals.format(&local).unwrap());
    }

    #[test]
    fn test_instant_text_parses_back(instant in any_instant()) {
        let text = InstantPolicy::new().format(&instant).unwrap();
        prop_assert_eq!(parse_instant(&text), instant);
    }

    #[test]
    fn test_local_date_time_text_parses_back(local in any_local_date_time()) {
        let text = LocalDateTimePolicy::new().format(&local).unwrap();
        prop_assert_eq!(LocalDateTime::from(parse_local_date_time(&text)), local);
    }

    #[test]
    fn test_offset_date_time_text_parses_back(local in any_local_date_time(), offset in any_offset()) {
        let value = OffsetDateTime::new(local, offset);
        let text = OffsetDateTimePolicy::new().format(&value).unwrap();
        prop_assert_eq!(parse_offset_date_time(&text), value);
    }

    /// chrono's leap-second form is folded away, so text still parses back
    #[test]
    fn test_leap_second_input_parses_back(minute in -1_000_000i64..1_000_000, nanos in 0u32..2_000_000_000) {
        let datetime = DateTime::from_timestamp(minute * 60 + 59, nanos).unwrap();

        let instant = Instant::from(datetime);
        prop_assert!(instant.nanosecond() < 1_000_000_000);
        let text = InstantPolicy::new().format(&instant).unwrap();
        prop_assert_eq!(parse_instant(&text), instant);

        let time = LocalTime::from(datetime.time());
        let text = LocalTimePolicy::new().format(&time).unwrap();
        prop_assert_eq!(parse_local_time(&text), time);
    }

    #[test]
    fn test_duration_text_parses_back(duration in any_duration()) {
        let text = DurationPolicy::new().format(&duration).unwrap();
        prop_assert_eq!(parse_duration(&text), duration);
    }

    #[test]
    fn test_period_text_parses_back(period in any_period()) {
        let text = PeriodPolicy::new().format(&period).unwrap();
        prop_assert_eq!(parse_period(&text), period);
    }
}

// ============================================================================
// Logged Round Trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_logged_offset_parses_back(offset in any_offset()) {
        prop_assert_eq!(parse_offset(&logged_text(offset)), offset);
    }

    #[test]
    fn test_logged_local_date_parses_back(local in any_local_date_time()) {
        let date = local.date();
        prop_assert_eq!(parse_local_date(&logged_text(date)), date);
    }

    #[test]
    fn test_logged_local_time_parses_back(local in any_local_date_time()) {
        let time = local.time();
        prop_assert_eq!(parse_local_time(&logged_text(Some(time))), time);
    }

    #[test]
    fn test_logged_interval_parses_back(start in any_instant(), end in any_instant()) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let interval = Interval::new(Some(start), Some(end)).unwrap();

        let json = log_and_render(interval);
        prop_assert_eq!(parse_instant(json["start"].as_str().unwrap()), start);
        prop_assert_eq!(parse_instant(json["end"].as_str().unwrap()), end);
    }

    /// Exactly one registered policy claims any non-scalar value
    #[test]
    fn test_single_policy_claims_value(local in any_local_date_time(), offset in any_offset()) {
        let registry = Destructure::new().with_calendar_types(provider()).unwrap();
        let values: Vec<CalendarValue> = vec![
            local.into(),
            local.date().into(),
            local.time().into(),
            OffsetDateTime::new(local, offset).into(),
        ];

        for value in &values {
            let claims = registry
                .policies()
                .iter()
                .filter(|p| p.try_destructure(value, &registry).unwrap().is_some())
                .count();
            prop_assert_eq!(claims, 1);
        }
    }
}
