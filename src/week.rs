//! Weekdays, week-of-year, week-of-month and week counts.
//!
//! Week 1 of a week-year is the first week, starting on the configured
//! `first_day_of_week`, that holds at least `min_days_in_first_week` days of
//! the calendar year. Equivalently it is the week containing day
//! `min_days_in_first_week` of January. Dates before it belong to the last
//! week of the previous week-year, and dates from the next year's week 1
//! onward belong to the following week-year.

use num_integer::Integer;

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, JANUARY, MIN_DAY, SUNDAY};
use crate::day_count::{narrow, to_day_count};
use crate::error::{CalendarError, Result};
use crate::types::CivilDate;

/// ISO weekday (1 = Monday, 7 = Sunday) of an absolute day count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn iso_weekday(day_count: i64) -> u8 {
    // Day 1 (0001-01-01) is a Monday.
    match day_count.mod_floor(&i64::from(DAYS_IN_WEEK)) {
        0 => SUNDAY,
        remainder => remainder as u8,
    }
}

/// Day count of the first `first_day_of_week` on or before `day_count`.
pub(crate) fn start_of_week_containing(day_count: i64, first_day_of_week: u8) -> i64 {
    let offset = (iso_weekday(day_count) + DAYS_IN_WEEK - first_day_of_week) % DAYS_IN_WEEK;
    day_count - i64::from(offset)
}

fn first_day_of_year(year: i32, config: &CalendarConfig) -> Result<i64> {
    to_day_count(CivilDate::new(year, JANUARY, MIN_DAY), config)
}

fn next_year(year: i32) -> Result<i32> {
    year.checked_add(1).ok_or(CalendarError::OutOfRange)
}

/// Day count of the first day of week 1 of `year`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` only at the limits of `i64`.
pub fn first_day_of_week_year(year: i32, config: &CalendarConfig) -> Result<i64> {
    let anchor = first_day_of_year(year, config)?
        .checked_add(i64::from(config.min_days_in_first_week() - 1))
        .ok_or(CalendarError::OutOfRange)?;
    Ok(start_of_week_containing(anchor, config.first_day_of_week()))
}

/// ISO weekday (1 = Monday) of the date, whatever the configured week start.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn iso_day_of_week(date: CivilDate, config: &CalendarConfig) -> Result<u8> {
    Ok(iso_weekday(to_day_count(date, config)?))
}

/// Position (1-7) of the date within its week, where the configured
/// `first_day_of_week` is 1.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn day_of_week(date: CivilDate, config: &CalendarConfig) -> Result<u8> {
    let iso = iso_day_of_week(date, config)?;
    Ok((iso + DAYS_IN_WEEK - config.first_day_of_week()) % DAYS_IN_WEEK + 1)
}

fn week_number(day_count: i64, week_one_start: i64) -> Result<u8> {
    narrow((day_count - week_one_start).div_floor(&i64::from(DAYS_IN_WEEK)) + 1)
}

/// `(week_year, week)` of the date under the configured week rule.
///
/// The week-year differs from `date.year` for the few days around New Year
/// that belong to a week counted in the adjacent year.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn week_of_year(date: CivilDate, config: &CalendarConfig) -> Result<(i32, u8)> {
    let day_count = to_day_count(date, config)?;

    let week_one = first_day_of_week_year(date.year, config)?;
    if day_count < week_one {
        let prior_year = date.year.checked_sub(1).ok_or(CalendarError::OutOfRange)?;
        let prior_week_one = first_day_of_week_year(prior_year, config)?;
        return Ok((prior_year, week_number(day_count, prior_week_one)?));
    }

    let following_year = next_year(date.year)?;
    if day_count >= first_day_of_week_year(following_year, config)? {
        return Ok((following_year, 1));
    }

    Ok((date.year, week_number(day_count, week_one)?))
}

/// `(week_year, week)` under ISO-8601 (Monday start, four-day first week)
/// on the unmodified Gregorian calendar, regardless of any configuration.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn iso_week_of_year(date: CivilDate) -> Result<(i32, u8)> {
    week_of_year(date, &CalendarConfig::GREGORIAN)
}

/// The calendar year cut into 7-day weeks starting on its first day:
/// `(weeks, days_in_last_week)`.
///
/// This is always 53 weeks with a one or two day tail, whatever the week
/// rule. For the 52 or 53 weeks of a week-year use [`weeks_in_week_year`].
///
/// # Errors
/// Returns `CalendarError::OutOfRange` only at the limits of `i32` years.
pub fn weeks_in_year(year: i32, config: &CalendarConfig) -> Result<(u8, u8)> {
    let span = first_day_of_year(next_year(year)?, config)? - first_day_of_year(year, config)?;
    let (full_weeks, remainder) = span.div_rem(&i64::from(DAYS_IN_WEEK));
    if remainder == 0 {
        Ok((narrow(full_weeks)?, DAYS_IN_WEEK))
    } else {
        Ok((narrow(full_weeks + 1)?, narrow(remainder)?))
    }
}

/// Number of weeks (52 or 53) in the week-year `year`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` only at the limits of `i32` years.
pub fn weeks_in_week_year(year: i32, config: &CalendarConfig) -> Result<u8> {
    let span = first_day_of_week_year(next_year(year)?, config)? - first_day_of_week_year(year, config)?;
    narrow(span / i64::from(DAYS_IN_WEEK))
}

/// Whether the week-year `year` has 53 weeks.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` only at the limits of `i32` years.
pub fn is_long_year(year: i32, config: &CalendarConfig) -> Result<bool> {
    Ok(weeks_in_week_year(year, config)? == 53)
}

/// `(month, week)` of a civil date.
///
/// Week 1 is the week, starting on the configured `first_day_of_week`, that
/// contains the 1st of the month. It may begin in the previous month. Later
/// weeks follow in steps of seven days, so a month spans four to six weeks.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn week_of_month(date: CivilDate, config: &CalendarConfig) -> Result<(u8, u8)> {
    let day_count = to_day_count(date, config)?;
    let first_of_month = day_count - i64::from(date.day - 1);
    let week_one = start_of_week_containing(first_of_month, config.first_day_of_week());
    Ok((date.month, week_number(day_count, week_one)?))
}
