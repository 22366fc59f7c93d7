//! Configurable proleptic Gregorian calendar arithmetic.
//!
//! One engine serves a family of calendars that share the Gregorian month and
//! leap-year rules and differ only in their epoch and week conventions. A
//! [`CalendarConfig`] fixes those parameters; every operation is a pure
//! function of its inputs and that configuration.
//!
//! ```
//! use calendrical::{Calendar, CalendarSystem, CivilDate, PlusOptions, Unit};
//!
//! let end_of_january = CivilDate::new(2020, 1, 31);
//! let next = Calendar::GREGORIAN.plus(end_of_january, Unit::Months, 1, PlusOptions::default());
//! assert_eq!(next, Ok(CivilDate::new(2020, 2, 29)));
//!
//! assert_eq!(Calendar::GREGORIAN.week_of_year(CivilDate::new(2021, 1, 1)), Ok((2020, 53)));
//! assert_eq!(Calendar::US.week_of_year(CivilDate::new(2021, 1, 1)), Ok((2021, 1)));
//! ```
//!
//! Free functions taking `&CalendarConfig` are exported alongside the
//! [`CalendarSystem`] trait for callers that hold a configuration directly.

mod arithmetic;
mod calendar;
mod config;
mod consts;
mod day_count;
mod era;
mod error;
mod month;
mod prelude;
mod range;
mod types;
mod week;

#[cfg(test)]
mod test_utils;

pub use arithmetic::{days_between, plus};
pub use calendar::{Calendar, CalendarSystem};
pub use config::{CalendarConfig, CalendarConfigBuilder, CalendarType};
pub use consts::*;
pub use day_count::{
    DayFraction, IsoDays, from_day_count, from_iso_days, gregorian_day_count, gregorian_from_day_count,
    to_day_count, to_iso_days,
};
pub use era::{calendar_year, cyclic_year, day_of_era, extended_year, related_gregorian_year, year_of_era};
pub use error::{CalendarError, Result};
pub use month::{
    day_of_year, days_in_month, days_in_week, days_in_year, is_leap_year, is_valid_date, month_of_year,
    months_in_year, quarter_of_year, quarters_in_year, validate_date,
};
pub use range::{PeriodRange, month_range, quarter_range, week_range, year_range};
pub use types::{CivilDate, Era, Overflow, PlusOptions, Unit};
pub use week::{
    day_of_week, first_day_of_week_year, is_long_year, iso_day_of_week, iso_week_of_year, week_of_month,
    week_of_year, weeks_in_week_year, weeks_in_year,
};
