//! Era membership and year projections.
//!
//! The Gregorian family has two eras split at year 1. Era-local years count
//! up from 1 in both directions, so year 0 is year 1 of the earlier era.

use crate::config::CalendarConfig;
use crate::day_count::to_day_count;
use crate::error::Result;
use crate::types::{CivilDate, Era};

/// `(era_year, era)` of a proleptic year number.
///
/// `i32::MIN` has no representable era year and saturates to `i32::MAX`.
pub const fn year_of_era(year: i32, _config: &CalendarConfig) -> (i32, Era) {
    if year >= 1 {
        (year, Era::Common)
    } else {
        (1_i32.saturating_sub(year), Era::BeforeCommon)
    }
}

/// `(day_of_era, era)`: 1-based days from the epoch forward in the common
/// era, and from the day before the epoch backward in the earlier era.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn day_of_era(date: CivilDate, config: &CalendarConfig) -> Result<(i64, Era)> {
    let day_count = to_day_count(date, config)?;
    if date.year >= 1 {
        Ok((day_count - config.epoch() + 1, Era::Common))
    } else {
        Ok((config.epoch() - day_count, Era::BeforeCommon))
    }
}

pub const fn calendar_year(year: i32, _config: &CalendarConfig) -> i32 {
    year
}

pub const fn related_gregorian_year(year: i32, _config: &CalendarConfig) -> i32 {
    year
}

pub const fn extended_year(year: i32, _config: &CalendarConfig) -> i32 {
    year
}

pub const fn cyclic_year(year: i32, _config: &CalendarConfig) -> i32 {
    year
}
