//! Domain model for the calendar cursor: a year and month with the day fixed to the 1st.
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate, // always the 1st of the month
}

impl YearMonth {
    /// Build from year and month, `None` if the month is outside 1..=12 or the
    /// year is outside the supported date range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// Normalize any date to its month
    pub fn from_date(date: NaiveDate) -> Self {
        // The 1st of a representable date's month is representable too
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The 1st of this month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The given day of this month, `None` if the month is shorter
    pub fn with_day(&self, day: u32) -> Option<NaiveDate> {
        self.first_day.with_day(day)
    }

    /// Month before this one, `None` at the start of the supported range
    pub fn previous(&self) -> Option<Self> {
        self.minus_months(1)
    }

    /// Month after this one, `None` at the end of the supported range
    pub fn next(&self) -> Option<Self> {
        self.plus_months(1)
    }

    pub fn plus_months(&self, months: u32) -> Option<Self> {
        self.shift(i64::from(months))
    }

    pub fn minus_months(&self, months: u32) -> Option<Self> {
        self.shift(-i64::from(months))
    }

    fn shift(&self, delta: i64) -> Option<Self> {
        let total_months = i64::from(self.year()) * 12 + i64::from(self.month() - 1) + delta;
        let year = i32::try_from(total_months.div_euclid(12)).ok()?;
        Self::new(year, total_months.rem_euclid(12) as u32 + 1)
    }

    /// Number of days in this month (proleptic Gregorian)
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday of the 1st, Monday = 0 ... Sunday = 6
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day.weekday().num_days_from_monday()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
