//! Request windows for daily market data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Half-open date window `[start, end)`.
///
/// The end date is exclusive, matching how daily history downloads are
/// usually requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range, rejecting an empty or inverted window.
    pub fn new(start: Date, end: Date) -> CoreResult<Self> {
        if start >= end {
            return Err(CoreError::invalid_date(format!(
                "range start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First date included in the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// First date after the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Lookback period such as `2y`, `6mo` or `90d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Lookback {
    /// Calendar days.
    Days(u32),
    /// Calendar weeks.
    Weeks(u32),
    /// Calendar months.
    Months(u32),
    /// Calendar years.
    Years(u32),
    /// From January 1st of the as-of year.
    YearToDate,
}

impl Lookback {
    /// Resolves the lookback to a range whose last included day is `as_of`.
    pub fn range_ending(&self, as_of: Date) -> CoreResult<DateRange> {
        let count = |n: u32| {
            i32::try_from(n).map_err(|_| CoreError::invalid_period(self.to_string(), "count too large"))
        };
        let start = match *self {
            Lookback::Days(n) => as_of.checked_add_days(-i64::from(n))?,
            Lookback::Weeks(n) => as_of.checked_add_days(-7 * i64::from(n))?,
            Lookback::Months(n) => as_of.add_months(-count(n)?)?,
            Lookback::Years(n) => as_of.add_years(-count(n)?)?,
            Lookback::YearToDate => Date::start_of_year(as_of.year()),
        };
        DateRange::new(start, as_of.checked_add_days(1)?)
    }
}

impl FromStr for Lookback {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        if input == "ytd" {
            return Ok(Lookback::YearToDate);
        }

        let split = input
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| CoreError::invalid_period(s, "missing unit (d, wk, mo, y)"))?;
        let (digits, unit) = input.split_at(split);

        let n: u32 = digits
            .parse()
            .map_err(|_| CoreError::invalid_period(s, "missing count"))?;
        if n == 0 {
            return Err(CoreError::invalid_period(s, "count must be positive"));
        }

        match unit {
            "d" => Ok(Lookback::Days(n)),
            "w" | "wk" => Ok(Lookback::Weeks(n)),
            "m" | "mo" => Ok(Lookback::Months(n)),
            "y" => Ok(Lookback::Years(n)),
            other => Err(CoreError::invalid_period(s, format!("unknown unit '{other}'"))),
        }
    }
}

impl TryFrom<String> for Lookback {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lookback> for String {
    fn from(value: Lookback) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookback::Days(n) => write!(f, "{n}d"),
            Lookback::Weeks(n) => write!(f, "{n}wk"),
            Lookback::Months(n) => write!(f, "{n}mo"),
            Lookback::Years(n) => write!(f, "{n}y"),
            Lookback::YearToDate => f.write_str("ytd"),
        }
    }
}
