//! Adding signed increments of a single unit to a civil date.

use num_integer::Integer;
use tracing::trace;

use crate::config::CalendarConfig;
use crate::day_count::{from_day_count, narrow, to_day_count};
use crate::error::{CalendarError, Result};
use crate::month::validate_date;
use crate::types::{self, CivilDate, Overflow, PlusOptions, Unit};

const MONTHS_PER_UNIT_YEAR: i64 = 12;
const MONTHS_PER_UNIT_QUARTER: i64 = 3;
const DAYS_PER_UNIT_WEEK: i64 = 7;

/// Adds `amount` of `unit` to `date`.
///
/// Year, quarter and month increments move the month with carry into the
/// year and keep the day of month, clamping it to the last day of the target
/// month unless `options` asks for rejection. Week and day increments are
/// exact and go through the day count.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `date` is malformed, or if the
/// day does not exist in the target month under `Overflow::Reject`.
/// Returns `CalendarError::OutOfRange` if the result cannot be represented.
pub fn plus(
    date: CivilDate,
    config: &CalendarConfig,
    unit: Unit,
    amount: i64,
    options: PlusOptions,
) -> Result<CivilDate> {
    let result = match unit {
        Unit::Years => add_months(date, config, scale(amount, MONTHS_PER_UNIT_YEAR)?, options),
        Unit::Quarters => add_months(date, config, scale(amount, MONTHS_PER_UNIT_QUARTER)?, options),
        Unit::Months => add_months(date, config, amount, options),
        Unit::Weeks => add_days(date, config, scale(amount, DAYS_PER_UNIT_WEEK)?),
        Unit::Days => add_days(date, config, amount),
    }?;

    trace!(%date, %unit, amount, %result, "date arithmetic");
    Ok(result)
}

fn scale(amount: i64, factor: i64) -> Result<i64> {
    amount.checked_mul(factor).ok_or(CalendarError::OutOfRange)
}

fn add_months(date: CivilDate, config: &CalendarConfig, months: i64, options: PlusOptions) -> Result<CivilDate> {
    validate_date(date, config)?;

    let month_index = i64::from(date.year) * MONTHS_PER_UNIT_YEAR + i64::from(date.month - 1);
    let shifted = month_index.checked_add(months).ok_or(CalendarError::OutOfRange)?;
    let (year, month_offset) = shifted.div_mod_floor(&MONTHS_PER_UNIT_YEAR);
    let year: i32 = narrow(year)?;
    let month: u8 = narrow(month_offset + 1)?;

    let max_day = types::days_in_month(year, month);
    let day = if date.day <= max_day {
        date.day
    } else {
        match options.overflow {
            Overflow::Constrain => max_day,
            Overflow::Reject => {
                return Err(CalendarError::InvalidDate {
                    year,
                    month,
                    day: date.day,
                });
            }
        }
    };

    Ok(CivilDate::new(year, month, day))
}

fn add_days(date: CivilDate, config: &CalendarConfig, days: i64) -> Result<CivilDate> {
    let day_count = to_day_count(date, config)?;
    let shifted = day_count.checked_add(days).ok_or(CalendarError::OutOfRange)?;
    from_day_count(shifted, config)
}

/// Signed number of days from `from` to `to`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if either date is malformed.
pub fn days_between(from: CivilDate, to: CivilDate, config: &CalendarConfig) -> Result<i64> {
    Ok(to_day_count(to, config)? - to_day_count(from, config)?)
}
