//! Calendar value logging example
//!
//! Logs the same calendar values twice: once with the calendar destructuring
//! policies registered, and once without, to show the difference in output.
//!
//! Run with: cargo run --example calendar_logging

use rust_logger_calendar::prelude::*;
use std::sync::Arc;

const CANBERRA: &str = "Australia/Canberra";

fn log_samples(logger: &Logger, provider: &dyn ZoneProvider) -> Result<()> {
    let context = logger.for_context("Instant", Instant::now(), true)?;

    let canberra = provider
        .get_zone(CANBERRA)
        .ok_or_else(|| LoggerError::invalid_argument("zone", "Canberra zone is missing"))?;
    let local = LocalDateTime::new(2018, 12, 11, 10, 9, 8)
        .ok_or_else(|| LoggerError::invalid_data("sample date is out of range"))?;
    let offset = Offset::from_hours(10)
        .ok_or_else(|| LoggerError::invalid_data("sample offset is out of range"))?;

    context
        .information_builder()
        .message("Duration")
        .destructure("Duration", Duration::from_minutes(69))
        .log();

    context
        .information_builder()
        .message("Interval")
        .destructure(
            "Interval",
            Interval::new(Instant::from_julian_date(0.0), Instant::from_unix_millis(0)),
        )
        .log();

    context
        .information_builder()
        .message("Period")
        .destructure("Period", Period::from_nanoseconds(1_234_567_890))
        .log();

    context
        .information_builder()
        .message("OffsetDateTime")
        .destructure("OffsetDateTime", OffsetDateTime::new(local, offset))
        .log();

    context
        .information_builder()
        .message("ZonedDateTime")
        .destructure("ZonedDateTime", local.in_zone_leniently(&canberra))
        .log();

    context
        .information_builder()
        .message("CalendarSystem")
        .destructure("CalendarSystem", CalendarSystem::Julian)
        .log();

    context
        .information_builder()
        .message("Offset")
        .destructure("Offset", Offset::from_hours_and_minutes(1, 2))
        .log();

    context.flush()
}

fn main() -> Result<()> {
    println!("=== Rust Logger Calendar - Calendar Logging Example ===\n");

    let provider: Arc<dyn ZoneProvider> = Arc::new(
        FixedZoneProvider::new()
            .with_zone(CANBERRA, Offset::from_hours(11).unwrap_or(Offset::ZERO)),
    );

    println!("1. With calendar destructuring:");
    let logger = LoggerConfiguration::new()
        .configure_for_calendar(Arc::clone(&provider))?
        .appender(ConsoleAppender::new())
        .create_logger();
    log_samples(&logger, provider.as_ref())?;

    println!("\n2. Without calendar destructuring:");
    let logger = LoggerConfiguration::new()
        .appender(ConsoleAppender::new())
        .create_logger();
    log_samples(&logger, provider.as_ref())?;

    println!("\n3. Compact JSON output:");
    let logger = LoggerConfiguration::new()
        .configure_for_calendar(Arc::clone(&provider))?
        .appender(ConsoleAppender::with_colors(false).with_output_format(OutputFormat::CompactJson))
        .create_logger();
    log_samples(&logger, provider.as_ref())?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
