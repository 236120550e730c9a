//! Calendar periods

use std::fmt;

use crate::destructure::pattern::{Pattern, RoundtripPattern};

/// An amount of calendar time expressed in separate units
///
/// Unlike [`super::Duration`], units are not normalized: one month is not a
/// fixed number of days, so `P1M` and `P30D` are different periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    /// Units of 100 nanoseconds
    pub ticks: i64,
    pub nanoseconds: i64,
}

impl Period {
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        ticks: 0,
        nanoseconds: 0,
    };

    pub fn from_years(years: i32) -> Self {
        Self { years, ..Self::ZERO }
    }

    pub fn from_months(months: i32) -> Self {
        Self { months, ..Self::ZERO }
    }

    pub fn from_days(days: i32) -> Self {
        Self { days, ..Self::ZERO }
    }

    pub fn from_hours(hours: i64) -> Self {
        Self { hours, ..Self::ZERO }
    }

    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self {
            nanoseconds,
            ..Self::ZERO
        }
    }

    pub fn has_date_component(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    pub fn has_time_component(&self) -> bool {
        self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.milliseconds != 0
            || self.ticks != 0
            || self.nanoseconds != 0
    }

    pub fn is_zero(&self) -> bool {
        !self.has_date_component() && !self.has_time_component()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&RoundtripPattern.format(self))
    }
}
