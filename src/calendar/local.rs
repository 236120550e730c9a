//! Dates and times without an offset or time zone

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use super::{
    is_leap_second, without_leap_second, CalendarSystem, DateTimeZone, HasCalendar, ZonedDateTime,
};
use crate::destructure::pattern::{IsoPattern, Pattern};

/// Append the calendar name to ISO text for values outside the ISO calendar
fn fmt_with_calendar(f: &mut fmt::Formatter<'_>, text: &str, calendar: CalendarSystem) -> fmt::Result {
    if calendar.is_iso() {
        f.write_str(text)
    } else {
        write!(f, "{} ({})", text, calendar)
    }
}

/// A date within a calendar system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDate {
    date: NaiveDate,
    calendar: CalendarSystem,
}

impl LocalDate {
    /// ISO calendar date, or `None` if the fields do not name a real day
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// The same year, month and day fields, tagged with another calendar system
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn as_naive(&self) -> &NaiveDate {
        &self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn at(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime {
            datetime: NaiveDateTime::new(self.date, *time.as_naive()),
            calendar: self.calendar,
        }
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            date,
            calendar: CalendarSystem::Iso,
        }
    }
}

impl HasCalendar for LocalDate {
    fn calendar(&self) -> CalendarSystem {
        self.calendar
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_calendar(f, &IsoPattern.format(self), self.calendar)
    }
}

/// A time of day with nanosecond precision
///
/// Leap seconds are not represented: constructors reject them and
/// conversions from `chrono` fold them into the preceding second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime(NaiveTime);

impl LocalTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    pub fn with_millis(hour: u32, minute: u32, second: u32, millis: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, millis)
            .filter(|time| !is_leap_second(time))
            .map(Self)
    }

    pub fn with_nanos(hour: u32, minute: u32, second: u32, nanos: u32) -> Option<Self> {
        NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
            .filter(|time| !is_leap_second(time))
            .map(Self)
    }

    pub fn as_naive(&self) -> &NaiveTime {
        &self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        Self(without_leap_second(time))
    }
}

impl HasCalendar for LocalTime {
    /// A bare time of day always belongs to the ISO calendar.
    fn calendar(&self) -> CalendarSystem {
        CalendarSystem::Iso
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IsoPattern.format(self))
    }
}

/// A date and time of day within a calendar system, with no offset or zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDateTime {
    datetime: NaiveDateTime,
    calendar: CalendarSystem,
}

impl LocalDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        let date = LocalDate::new(year, month, day)?;
        let time = LocalTime::new(hour, minute, second)?;
        Some(date.at(time))
    }

    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.datetime
    }

    pub fn date(&self) -> LocalDate {
        LocalDate {
            date: self.datetime.date(),
            calendar: self.calendar,
        }
    }

    pub fn time(&self) -> LocalTime {
        LocalTime(self.datetime.time())
    }

    /// Place this local value in a zone, using the zone's offset
    ///
    /// Fixed-offset zones have no gaps or overlaps, so every local value maps
    /// to exactly one instant.
    pub fn in_zone_leniently(&self, zone: &DateTimeZone) -> ZonedDateTime {
        ZonedDateTime::new(*self, zone.clone())
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    /// A leap second is folded into the second before it.
    fn from(datetime: NaiveDateTime) -> Self {
        Self {
            datetime: without_leap_second(datetime),
            calendar: CalendarSystem::Iso,
        }
    }
}

impl HasCalendar for LocalDateTime {
    fn calendar(&self) -> CalendarSystem {
        self.calendar
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_calendar(f, &IsoPattern.format(self), self.calendar)
    }
}

/// A month within a year of a calendar system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
    calendar: CalendarSystem,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Range-check the year the same way a full date would be.
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            year,
            month,
            calendar: CalendarSystem::Iso,
        })
    }

    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn on_day(&self, day: u32) -> Option<LocalDate> {
        LocalDate::new(self.year, self.month, day).map(|d| d.with_calendar(self.calendar))
    }
}

impl HasCalendar for YearMonth {
    fn calendar(&self) -> CalendarSystem {
        self.calendar
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_calendar(f, &IsoPattern.format(self), self.calendar)
    }
}
