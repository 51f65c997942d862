//! Date type for daily price observations.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date of a daily observation.
///
/// Newtype around `chrono::NaiveDate` so series, ranges and lookbacks share
/// one ordering and formatting (`YYYY-MM-DD`).
///
/// # Example
///
/// ```rust
/// use hedgefolio_core::Date;
///
/// let date = Date::from_ymd(2021, 3, 31).unwrap();
/// let back = date.add_months(-1).unwrap();
/// assert_eq!(back.to_string(), "2021-02-28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Date from calendar components; `InvalidDate` if no such day exists.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// January 1st of `year`, saturating outside the supported range.
    #[must_use]
    pub fn start_of_year(year: i32) -> Self {
        Date(
            NaiveDate::from_ymd_opt(year, 1, 1)
                .unwrap_or(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX }),
        )
    }

    /// December 31st of `year`, saturating outside the supported range.
    #[must_use]
    pub fn end_of_year(year: i32) -> Self {
        Date(
            NaiveDate::from_ymd_opt(year, 12, 31)
                .unwrap_or(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX }),
        )
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Today in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The date `days` calendar days later (earlier when negative),
    /// saturating at the ends of the supported calendar.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days).unwrap_or(if days < 0 {
            Date(NaiveDate::MIN)
        } else {
            Date(NaiveDate::MAX)
        })
    }

    /// Shifts the date by `days`; `InvalidDate` outside the supported calendar.
    pub fn checked_add_days(&self, days: i64) -> CoreResult<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} shifted by {days} days")))
    }

    /// Shifts the date by whole months, clamping the day to the target
    /// month's length (Mar 31 minus one month is Feb 28).
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let shift = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(shift)
        } else {
            self.0.checked_sub_months(shift)
        };
        shifted
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} shifted by {months} months")))
    }

    /// Shifts the date by whole years (Feb 29 becomes Feb 28).
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        years
            .checked_mul(12)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} shifted by {years} years")))
            .and_then(|months| self.add_months(months))
    }

    /// Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}
