//! Points and spans on the global time line

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::fmt;

use super::{is_leap_second, without_leap_second};
use crate::destructure::pattern::{GeneralPattern, Pattern, RoundtripPattern};

/// Julian date of the Unix epoch
const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A point on the global time line, independent of calendar and time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Instant at the given UTC date and time, or `None` if out of range
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
    }

    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// `None` when out of range or when `nanos` denotes a leap second
    pub fn from_unix_seconds(seconds: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(seconds, nanos)
            .filter(|datetime| !is_leap_second(datetime))
            .map(Self)
    }

    /// Instant for a Julian date, to millisecond precision
    ///
    /// Julian date zero is noon UTC on 24 November 4714 BCE (proleptic
    /// Gregorian), i.e. `-4713-11-24T12:00:00Z`.
    pub fn from_julian_date(julian_date: f64) -> Option<Self> {
        let millis = ((julian_date - UNIX_EPOCH_JULIAN_DATE) * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        Self::from_unix_millis(millis as i64)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Nanosecond within the second
    pub fn nanosecond(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    pub fn plus(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration.0).map(Self)
    }
}

impl From<DateTime<Utc>> for Instant {
    /// A leap second is folded into the second before it.
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(without_leap_second(datetime))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&GeneralPattern.format(self))
    }
}

/// A fixed number of elapsed nanoseconds, independent of any calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(TimeDelta);

impl Duration {
    pub const ZERO: Duration = Duration(TimeDelta::zero());

    pub fn from_nanoseconds(nanos: i64) -> Self {
        Self(TimeDelta::nanoseconds(nanos))
    }

    pub fn from_seconds(seconds: i64) -> Option<Self> {
        TimeDelta::try_seconds(seconds).map(Self)
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        TimeDelta::try_minutes(minutes).map(Self)
    }

    pub fn from_days(days: i64) -> Option<Self> {
        TimeDelta::try_days(days).map(Self)
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < TimeDelta::zero()
    }

    /// Magnitude split into whole seconds and the nanosecond remainder
    pub fn abs_parts(&self) -> (u64, u32) {
        let seconds = self.0.num_seconds();
        let nanos = self.0.subsec_nanos();
        (seconds.unsigned_abs(), nanos.unsigned_abs())
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&RoundtripPattern.format(self))
    }
}

/// A span between two instants, either of which may be unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Interval {
    /// Interval over `[start, end)`, or `None` when `end` precedes `start`
    ///
    /// A missing start extends to the beginning of time and a missing end to
    /// the end of time.
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Option<Self> {
        if let (Some(s), Some(e)) = (&start, &end) {
            if e < s {
                return None;
            }
        }
        Some(Self { start, end })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&Instant> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Instant> {
        self.end.as_ref()
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            Some(start) => write!(f, "{}", start)?,
            None => f.write_str("StartOfTime")?,
        }
        f.write_str("/")?;
        match &self.end {
            Some(end) => write!(f, "{}", end),
            None => f.write_str("EndOfTime"),
        }
    }
}
