//! Month lengths, year lengths and the leap-year rule.
//!
//! Leap years are decided on the year number itself, never on an
//! epoch-shifted year, so every calendar in the family shares the same
//! month table.

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, JANUARY, MIN_DAY, MONTHS_IN_QUARTER, MONTHS_IN_YEAR, QUARTERS_IN_YEAR};
use crate::error::{CalendarError, Result};
use crate::types::{self, CivilDate};

pub fn is_leap_year(year: i32, _config: &CalendarConfig) -> bool {
    types::is_leap_year(year)
}

/// Number of days in `month` of `year` (28-31).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u8, _config: &CalendarConfig) -> Result<u8> {
    if !(JANUARY..=MONTHS_IN_YEAR).contains(&month) {
        return Err(CalendarError::InvalidDate {
            year,
            month,
            day: MIN_DAY,
        });
    }
    Ok(types::days_in_month(year, month))
}

pub fn days_in_year(year: i32, _config: &CalendarConfig) -> u16 {
    types::days_in_year(year)
}

pub const fn months_in_year(_year: i32, _config: &CalendarConfig) -> u8 {
    MONTHS_IN_YEAR
}

pub const fn quarters_in_year(_year: i32, _config: &CalendarConfig) -> u8 {
    QUARTERS_IN_YEAR
}

pub const fn days_in_week(_config: &CalendarConfig) -> u8 {
    DAYS_IN_WEEK
}

/// Checks that the month is 1-12 and the day exists in that month.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` otherwise. The date is never clamped.
pub fn validate_date(date: CivilDate, config: &CalendarConfig) -> Result<()> {
    let invalid = CalendarError::InvalidDate {
        year:  date.year,
        month: date.month,
        day:   date.day,
    };
    let max_day = days_in_month(date.year, date.month, config).map_err(|_| invalid.clone())?;
    if (MIN_DAY..=max_day).contains(&date.day) {
        Ok(())
    } else {
        Err(invalid)
    }
}

pub fn is_valid_date(date: CivilDate, config: &CalendarConfig) -> bool {
    validate_date(date, config).is_ok()
}

/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn month_of_year(date: CivilDate, config: &CalendarConfig) -> Result<u8> {
    validate_date(date, config)?;
    Ok(date.month)
}

/// Quarter (1-4) containing the date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn quarter_of_year(date: CivilDate, config: &CalendarConfig) -> Result<u8> {
    validate_date(date, config)?;
    Ok(date.month.div_ceil(MONTHS_IN_QUARTER))
}

/// Ordinal day (1-366) of the date within its year.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn day_of_year(date: CivilDate, config: &CalendarConfig) -> Result<u16> {
    validate_date(date, config)?;
    let preceding: u16 = (JANUARY..date.month)
        .map(|month| u16::from(types::days_in_month(date.year, month)))
        .sum();
    Ok(preceding + u16::from(date.day))
}
