use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MIN_DAY, MONTHS_IN_QUARTER, QUARTERS_IN_YEAR};
use crate::day_count::from_day_count;
use crate::error::{CalendarError, Result};
use crate::month::days_in_month;
use crate::prelude::*;
use crate::types::CivilDate;
use crate::week::{first_day_of_week_year, weeks_in_week_year};

/// An inclusive run of days: a year, quarter, month or week.
/// The first date is never after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{first}/{last}")]
#[serde(try_from = "RawPeriodRange")]
pub struct PeriodRange {
    first: CivilDate,
    last:  CivilDate,
}

impl PeriodRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if first > last.
    pub fn new(first: CivilDate, last: CivilDate) -> Result<Self> {
        if first > last {
            return Err(CalendarError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub const fn first(&self) -> CivilDate {
        self.first
    }

    pub const fn last(&self) -> CivilDate {
        self.last
    }

    /// Returns both dates as a tuple
    pub const fn dates(&self) -> (CivilDate, CivilDate) {
        (self.first, self.last)
    }

    pub fn contains(&self, date: &CivilDate) -> bool {
        self.first <= *date && *date <= self.last
    }

    /// Checks if the two ranges share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.first <= self.first && self.last <= other.last
    }

    /// Number of days in the range, both ends included.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if either end is not a valid date.
    pub fn days(&self, config: &CalendarConfig) -> Result<i64> {
        Ok(crate::arithmetic::days_between(self.first, self.last, config)? + 1)
    }
}

#[derive(Deserialize)]
struct RawPeriodRange {
    first: CivilDate,
    last:  CivilDate,
}

impl TryFrom<RawPeriodRange> for PeriodRange {
    type Error = CalendarError;

    fn try_from(raw: RawPeriodRange) -> Result<Self> {
        Self::new(raw.first, raw.last)
    }
}

/// January 1 through December 31 of `year`.
pub const fn year_range(year: i32, _config: &CalendarConfig) -> PeriodRange {
    PeriodRange {
        first: CivilDate::new(year, JANUARY, MIN_DAY),
        last:  CivilDate::new(year, DECEMBER, 31),
    }
}

/// The three months of `quarter` (1-4) in `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidPeriod` if `quarter` is outside 1-4.
pub fn quarter_range(year: i32, quarter: u8, config: &CalendarConfig) -> Result<PeriodRange> {
    if !(1..=QUARTERS_IN_YEAR).contains(&quarter) {
        return Err(CalendarError::InvalidPeriod {
            period: "quarter",
            value:  i64::from(quarter),
        });
    }
    let last_month = quarter * MONTHS_IN_QUARTER;
    let first_month = last_month - (MONTHS_IN_QUARTER - 1);
    Ok(PeriodRange {
        first: CivilDate::new(year, first_month, MIN_DAY),
        last:  CivilDate::new(year, last_month, days_in_month(year, last_month, config)?),
    })
}

/// The first through last day of `month` in `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is outside 1-12.
pub fn month_range(year: i32, month: u8, config: &CalendarConfig) -> Result<PeriodRange> {
    let last_day = days_in_month(year, month, config)?;
    Ok(PeriodRange {
        first: CivilDate::new(year, month, MIN_DAY),
        last:  CivilDate::new(year, month, last_day),
    })
}

/// The seven days of `week` in `week_year` under the configured week rule.
/// The ends may fall in the adjacent calendar years.
///
/// # Errors
/// Returns `CalendarError::InvalidPeriod` if the week-year has no such week.
pub fn week_range(week_year: i32, week: u8, config: &CalendarConfig) -> Result<PeriodRange> {
    let weeks = weeks_in_week_year(week_year, config)?;
    if !(1..=weeks).contains(&week) {
        return Err(CalendarError::InvalidPeriod {
            period: "week",
            value:  i64::from(week),
        });
    }
    let days_per_week = i64::from(DAYS_IN_WEEK);
    let first = first_day_of_week_year(week_year, config)?
        .checked_add(days_per_week * i64::from(week - 1))
        .ok_or(CalendarError::OutOfRange)?;
    let last = first.checked_add(days_per_week - 1).ok_or(CalendarError::OutOfRange)?;
    Ok(PeriodRange {
        first: from_day_count(first, config)?,
        last:  from_day_count(last, config)?,
    })
}
