//! UTC offsets and values that carry one

use chrono::FixedOffset;
use std::fmt;

use super::{CalendarSystem, HasCalendar, Instant, LocalDate, LocalDateTime, LocalTime};
use crate::destructure::pattern::{IsoPattern, Pattern, Rfc3339Pattern};

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;

/// Difference between local time and UTC, in whole seconds
///
/// Positive offsets are east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { seconds: 0 };

    /// Offsets are limited to less than a day either side of UTC.
    pub fn from_seconds(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self::from)
    }

    pub fn from_hours(hours: i32) -> Option<Self> {
        Self::from_seconds(hours.checked_mul(SECONDS_PER_HOUR)?)
    }

    /// Both parts share a sign: `(-1, -30)` is ninety minutes west of UTC.
    pub fn from_hours_and_minutes(hours: i32, minutes: i32) -> Option<Self> {
        let seconds = hours
            .checked_mul(SECONDS_PER_HOUR)?
            .checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?)?;
        Self::from_seconds(seconds)
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Sign and the absolute hours, minutes and seconds
    pub(crate) fn parts(&self) -> (char, u32, u32, u32) {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let total = self.seconds.unsigned_abs();
        (sign, total / 3_600, (total / 60) % 60, total % 60)
    }

    /// Invariant general form: `+HH`, `+HH:mm` or `+HH:mm:ss`, whichever is
    /// the shortest exact representation
    pub(crate) fn write_general(&self, out: &mut String) {
        let (sign, hours, minutes, seconds) = self.parts();
        out.push(sign);
        out.push_str(&format!("{:02}", hours));
        if minutes != 0 || seconds != 0 {
            out.push_str(&format!(":{:02}", minutes));
        }
        if seconds != 0 {
            out.push_str(&format!(":{:02}", seconds));
        }
    }

    /// General form, except that UTC itself is written `Z`
    pub(crate) fn write_general_or_z(&self, out: &mut String) {
        if self.seconds == 0 {
            out.push('Z');
        } else {
            self.write_general(out);
        }
    }
}

impl From<FixedOffset> for Offset {
    fn from(offset: FixedOffset) -> Self {
        Self {
            seconds: offset.local_minus_utc(),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(9);
        self.write_general(&mut out);
        f.write_str(&out)
    }
}

/// A date with a UTC offset but no time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDate {
    date: LocalDate,
    offset: Offset,
}

impl OffsetDate {
    pub fn new(date: LocalDate, offset: Offset) -> Self {
        Self { date, offset }
    }

    pub fn date(&self) -> &LocalDate {
        &self.date
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }
}

impl HasCalendar for OffsetDate {
    fn calendar(&self) -> CalendarSystem {
        self.date.calendar()
    }
}

impl fmt::Display for OffsetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IsoPattern.format(self))
    }
}

/// A time of day with a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: LocalTime,
    offset: Offset,
}

impl OffsetTime {
    pub fn new(time: LocalTime, offset: Offset) -> Self {
        Self { time, offset }
    }

    pub fn time(&self) -> &LocalTime {
        &self.time
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }
}

impl HasCalendar for OffsetTime {
    /// A bare time of day always belongs to the ISO calendar.
    fn calendar(&self) -> CalendarSystem {
        CalendarSystem::Iso
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IsoPattern.format(self))
    }
}

/// A local date and time together with the UTC offset in force at that moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: Offset,
}

impl OffsetDateTime {
    pub fn new(local: LocalDateTime, offset: Offset) -> Self {
        Self { local, offset }
    }

    pub fn local(&self) -> &LocalDateTime {
        &self.local
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The instant this value denotes, if it is representable
    pub fn to_instant(&self) -> Option<Instant> {
        let utc = self
            .local
            .as_naive()
            .checked_sub_signed(chrono::TimeDelta::seconds(i64::from(self.offset.seconds)))?;
        Some(Instant::from(utc.and_utc()))
    }
}

impl HasCalendar for OffsetDateTime {
    fn calendar(&self) -> CalendarSystem {
        self.local.calendar()
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Rfc3339Pattern.format(self))
    }
}
