//! The calendar engine as a value.
//!
//! [`CalendarSystem`] exposes every operation as a method over a borrowed
//! configuration. [`Calendar`] is the one implementation shipped here; other
//! types can implement the trait by handing out their own configuration.

use crate::arithmetic;
use crate::config::CalendarConfig;
use crate::day_count::{self, DayFraction, IsoDays};
use crate::era;
use crate::error::Result;
use crate::month;
use crate::range::{self, PeriodRange};
use crate::types::{CivilDate, Era, PlusOptions, Unit};
use crate::week;

/// Calendar operations parameterized by a configuration.
pub trait CalendarSystem {
    fn config(&self) -> &CalendarConfig;

    // Day counts

    /// See [`to_day_count`](crate::to_day_count).
    fn to_day_count(&self, date: CivilDate) -> Result<i64> {
        day_count::to_day_count(date, self.config())
    }

    /// See [`from_day_count`](crate::from_day_count).
    #[allow(clippy::wrong_self_convention)]
    fn from_day_count(&self, day_count: i64) -> Result<CivilDate> {
        day_count::from_day_count(day_count, self.config())
    }

    fn to_iso_days(&self, date: CivilDate, fraction: Option<DayFraction>) -> Result<IsoDays> {
        day_count::to_iso_days(date, fraction, self.config())
    }

    #[allow(clippy::wrong_self_convention)]
    fn from_iso_days(&self, iso_days: IsoDays) -> Result<(CivilDate, Option<DayFraction>)> {
        day_count::from_iso_days(iso_days, self.config())
    }

    // Months and years

    fn is_leap_year(&self, year: i32) -> bool {
        month::is_leap_year(year, self.config())
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8> {
        month::days_in_month(year, month, self.config())
    }

    fn days_in_year(&self, year: i32) -> u16 {
        month::days_in_year(year, self.config())
    }

    fn months_in_year(&self, year: i32) -> u8 {
        month::months_in_year(year, self.config())
    }

    fn quarters_in_year(&self, year: i32) -> u8 {
        month::quarters_in_year(year, self.config())
    }

    fn days_in_week(&self) -> u8 {
        month::days_in_week(self.config())
    }

    fn validate_date(&self, date: CivilDate) -> Result<()> {
        month::validate_date(date, self.config())
    }

    fn is_valid_date(&self, date: CivilDate) -> bool {
        month::is_valid_date(date, self.config())
    }

    fn month_of_year(&self, date: CivilDate) -> Result<u8> {
        month::month_of_year(date, self.config())
    }

    fn quarter_of_year(&self, date: CivilDate) -> Result<u8> {
        month::quarter_of_year(date, self.config())
    }

    fn day_of_year(&self, date: CivilDate) -> Result<u16> {
        month::day_of_year(date, self.config())
    }

    // Weeks

    /// See [`day_of_week`](crate::day_of_week).
    fn day_of_week(&self, date: CivilDate) -> Result<u8> {
        week::day_of_week(date, self.config())
    }

    fn iso_day_of_week(&self, date: CivilDate) -> Result<u8> {
        week::iso_day_of_week(date, self.config())
    }

    /// ISO-8601 week of the date, ignoring this calendar's configuration.
    fn iso_week_of_year(&self, date: CivilDate) -> Result<(i32, u8)> {
        week::iso_week_of_year(date)
    }

    /// See [`week_of_year`](crate::week_of_year).
    fn week_of_year(&self, date: CivilDate) -> Result<(i32, u8)> {
        week::week_of_year(date, self.config())
    }

    fn weeks_in_year(&self, year: i32) -> Result<(u8, u8)> {
        week::weeks_in_year(year, self.config())
    }

    fn weeks_in_week_year(&self, year: i32) -> Result<u8> {
        week::weeks_in_week_year(year, self.config())
    }

    fn is_long_year(&self, year: i32) -> Result<bool> {
        week::is_long_year(year, self.config())
    }

    fn first_day_of_week_year(&self, year: i32) -> Result<i64> {
        week::first_day_of_week_year(year, self.config())
    }

    fn week_of_month(&self, date: CivilDate) -> Result<(u8, u8)> {
        week::week_of_month(date, self.config())
    }

    // Arithmetic

    /// See [`plus`](crate::plus).
    fn plus(&self, date: CivilDate, unit: Unit, amount: i64, options: PlusOptions) -> Result<CivilDate> {
        arithmetic::plus(date, self.config(), unit, amount, options)
    }

    fn days_between(&self, from: CivilDate, to: CivilDate) -> Result<i64> {
        arithmetic::days_between(from, to, self.config())
    }

    // Eras

    fn year_of_era(&self, year: i32) -> (i32, Era) {
        era::year_of_era(year, self.config())
    }

    fn day_of_era(&self, date: CivilDate) -> Result<(i64, Era)> {
        era::day_of_era(date, self.config())
    }

    fn calendar_year(&self, year: i32) -> i32 {
        era::calendar_year(year, self.config())
    }

    fn related_gregorian_year(&self, year: i32) -> i32 {
        era::related_gregorian_year(year, self.config())
    }

    fn extended_year(&self, year: i32) -> i32 {
        era::extended_year(year, self.config())
    }

    fn cyclic_year(&self, year: i32) -> i32 {
        era::cyclic_year(year, self.config())
    }

    // Periods

    fn year_range(&self, year: i32) -> PeriodRange {
        range::year_range(year, self.config())
    }

    fn quarter_range(&self, year: i32, quarter: u8) -> Result<PeriodRange> {
        range::quarter_range(year, quarter, self.config())
    }

    fn month_range(&self, year: i32, month: u8) -> Result<PeriodRange> {
        range::month_range(year, month, self.config())
    }

    fn week_range(&self, week_year: i32, week: u8) -> Result<PeriodRange> {
        range::week_range(week_year, week, self.config())
    }
}

/// A calendar of the Gregorian family, fixed by its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Calendar {
    config: CalendarConfig,
}

impl Calendar {
    /// Proleptic Gregorian calendar with ISO-8601 weeks.
    pub const GREGORIAN: Self = Self::new(CalendarConfig::GREGORIAN);
    /// Proleptic Gregorian calendar with Sunday-start weeks.
    pub const US: Self = Self::new(CalendarConfig::US);

    pub const fn new(config: CalendarConfig) -> Self {
        Self { config }
    }
}

impl From<CalendarConfig> for Calendar {
    fn from(config: CalendarConfig) -> Self {
        Self::new(config)
    }
}

impl CalendarSystem for Calendar {
    fn config(&self) -> &CalendarConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use crate::test_utils::{config_with_epoch, date};

    #[test]
    fn test_named_calendars() {
        assert_eq!(Calendar::GREGORIAN.config(), &CalendarConfig::GREGORIAN);
        assert_eq!(Calendar::US.config(), &CalendarConfig::US);
        assert_eq!(Calendar::default(), Calendar::GREGORIAN);
        assert_eq!(Calendar::from(CalendarConfig::US), Calendar::US);
    }

    #[test]
    fn test_methods_follow_configuration() {
        let new_year = date(2021, 1, 1);
        assert_eq!(Calendar::GREGORIAN.week_of_year(new_year), Ok((2020, 53)));
        assert_eq!(Calendar::US.week_of_year(new_year), Ok((2021, 1)));
        assert_eq!(Calendar::GREGORIAN.day_of_week(new_year), Ok(5));
        assert_eq!(Calendar::US.day_of_week(new_year), Ok(6));
        assert_eq!(Calendar::US.iso_week_of_year(new_year), Ok((2020, 53)));
    }

    #[test]
    fn test_identical_configurations_agree() {
        let first = Calendar::new(config_with_epoch(42));
        let second = Calendar::new(config_with_epoch(42));
        for offset in (-800..800).step_by(37) {
            let day = first
                .plus(date(2000, 2, 29), Unit::Days, offset, PlusOptions::default())
                .expect("date within range");
            assert_eq!(first.to_day_count(day), second.to_day_count(day));
            assert_eq!(first.week_of_year(day), second.week_of_year(day));
            assert_eq!(first.day_of_era(day), second.day_of_era(day));
        }
    }

    #[test]
    fn test_epoch_shift_moves_day_counts_only() {
        let shifted = Calendar::new(config_with_epoch(11));
        let day = date(2021, 3, 14);
        let expected = Calendar::GREGORIAN.to_day_count(day).map(|count| count + 10);
        assert_eq!(shifted.to_day_count(day), expected);
        assert_eq!(shifted.is_leap_year(2100), Calendar::GREGORIAN.is_leap_year(2100));
        assert_eq!(shifted.days_in_month(2024, 2), Ok(29));
    }

    #[test]
    fn test_trait_object() {
        let calendars: [&dyn CalendarSystem; 2] = [&Calendar::GREGORIAN, &Calendar::US];
        for calendar in calendars {
            assert_eq!(calendar.days_in_year(2020), 366);
            assert_eq!(calendar.quarter_of_year(date(2020, 8, 1)), Ok(3));
            assert_eq!(calendar.year_of_era(0), (1, Era::BeforeCommon));
            assert_eq!(
                calendar.month_range(2021, 0),
                Err(CalendarError::InvalidDate {
                    year:  2021,
                    month: 0,
                    day:   1,
                })
            );
        }
    }
}
