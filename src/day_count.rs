//! Conversion between civil dates and absolute day counts.
//!
//! Day counts are Rata Die style: 0001-01-01 of the unmodified proleptic
//! Gregorian calendar is day 1, 0000-12-31 is day 0 and earlier days are
//! negative. Both directions are closed form over the 400-year Gregorian
//! cycle, which starts with a leap year and has 97 leap days. Year 0 exists
//! and is a leap year.
//!
//! A calendar whose epoch differs from the Gregorian one keeps the Gregorian
//! year structure and only slides it along the day axis by
//! `epoch - GREGORIAN_EPOCH` days.

use num_integer::Integer;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::consts::{
    DAYS_IN_COMMON_YEAR, FEBRUARY, GREGORIAN_CENTURY_DAYS, GREGORIAN_CYCLE_DAYS, GREGORIAN_EPOCH,
    GREGORIAN_QUADRENNIUM_DAYS, JANUARY, MARCH, MIN_DAY,
};
use crate::error::{CalendarError, Result};
use crate::month::validate_date;
use crate::types::{CivilDate, is_leap_year};

/// Sub-day position, carried through conversions without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayFraction {
    pub parts:         u64,
    pub parts_per_day: u64,
}

/// An absolute day count with an optional sub-day fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoDays {
    pub days:     i64,
    pub fraction: Option<DayFraction>,
}

/// Day count of a date in the unmodified Gregorian calendar.
///
/// The date is assumed valid.
pub fn gregorian_day_count(year: i32, month: u8, day: u8) -> i64 {
    let prior_years = i64::from(year) - 1;
    // Month starts below assume a 30-day February; pull March onward back.
    let february_correction = if month <= FEBRUARY {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };

    GREGORIAN_EPOCH - 1
        + i64::from(DAYS_IN_COMMON_YEAR) * prior_years
        + prior_years.div_floor(&4)
        - prior_years.div_floor(&100)
        + prior_years.div_floor(&400)
        + (367 * i64::from(month) - 362) / 12
        + february_correction
        + i64::from(day)
}

/// Gregorian year containing the given day count.
fn gregorian_year_from_day_count(day_count: i64) -> Result<i32> {
    let days = day_count.checked_sub(GREGORIAN_EPOCH).ok_or(CalendarError::OutOfRange)?;

    let (cycles, days_into_cycle) = days.div_mod_floor(&GREGORIAN_CYCLE_DAYS);
    let (centuries, days_into_century) = days_into_cycle.div_rem(&GREGORIAN_CENTURY_DAYS);
    let (quadrennia, days_into_quadrennium) = days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);
    let years = days_into_quadrennium / i64::from(DAYS_IN_COMMON_YEAR);

    let completed = 400 * cycles + 100 * centuries + 4 * quadrennia + years;
    // A quotient of 4 only happens on the leap day closing a cycle or a
    // quadrennium, which still belongs to the completed year.
    let year = if centuries == 4 || years == 4 {
        completed
    } else {
        completed + 1
    };
    narrow(year)
}

/// Civil date of a day count in the unmodified Gregorian calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the year does not fit in `i32`.
pub fn gregorian_from_day_count(day_count: i64) -> Result<CivilDate> {
    let year = gregorian_year_from_day_count(day_count)?;
    let prior_days = day_count - gregorian_day_count(year, JANUARY, MIN_DAY);
    let correction = if day_count < gregorian_day_count(year, MARCH, MIN_DAY) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month: u8 = narrow((12 * (prior_days + correction) + 373) / 367)?;
    let day: u8 = narrow(day_count - gregorian_day_count(year, month, MIN_DAY) + 1)?;
    Ok(CivilDate::new(year, month, day))
}

/// Absolute day count of a civil date in the given calendar.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the month or day is out of range.
pub fn to_day_count(date: CivilDate, config: &CalendarConfig) -> Result<i64> {
    validate_date(date, config)?;
    gregorian_day_count(date.year, date.month, date.day)
        .checked_add(config.epoch_shift())
        .ok_or(CalendarError::OutOfRange)
}

/// Civil date of an absolute day count in the given calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the resulting year does not fit in
/// `i32`.
pub fn from_day_count(day_count: i64, config: &CalendarConfig) -> Result<CivilDate> {
    let gregorian = day_count
        .checked_sub(config.epoch_shift())
        .ok_or(CalendarError::OutOfRange)?;
    gregorian_from_day_count(gregorian)
}

/// Like [`to_day_count`], carrying a sub-day fraction along.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date is malformed.
pub fn to_iso_days(date: CivilDate, fraction: Option<DayFraction>, config: &CalendarConfig) -> Result<IsoDays> {
    Ok(IsoDays {
        days: to_day_count(date, config)?,
        fraction,
    })
}

/// Like [`from_day_count`], handing the sub-day fraction back untouched.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the resulting year does not fit in
/// `i32`.
pub fn from_iso_days(iso_days: IsoDays, config: &CalendarConfig) -> Result<(CivilDate, Option<DayFraction>)> {
    Ok((from_day_count(iso_days.days, config)?, iso_days.fraction))
}

pub(crate) fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| CalendarError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_EPOCH;
    use crate::range::week_range;
    use crate::test_utils::{config_with_epoch, date};
    use crate::week::week_of_year;

    #[test]
    fn test_known_gregorian_day_counts() {
        struct TestCase {
            date:        CivilDate,
            day_count:   i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        date(1, 1, 1),
                day_count:   1,
                description: "Gregorian epoch",
            },
            TestCase {
                date:        date(0, 12, 31),
                day_count:   0,
                description: "day before the epoch",
            },
            TestCase {
                date:        date(0, 1, 1),
                day_count:   -365,
                description: "year zero is a leap year",
            },
            TestCase {
                date:        date(-1, 12, 31),
                day_count:   -366,
                description: "last day of year -1",
            },
            TestCase {
                date:        date(1970, 1, 1),
                day_count:   719_163,
                description: "unix epoch",
            },
            TestCase {
                date:        date(2000, 1, 1),
                day_count:   730_120,
                description: "start of a 400-year cycle year",
            },
            TestCase {
                date:        date(2000, 2, 29),
                day_count:   730_179,
                description: "leap day of a quatercentennial year",
            },
            TestCase {
                date:        date(2000, 12, 31),
                day_count:   730_485,
                description: "last day closing a 400-year cycle",
            },
            TestCase {
                date:        date(1900, 3, 1),
                day_count:   693_655,
                description: "March 1 of a non-leap century",
            },
        ];

        for case in &cases {
            let config = CalendarConfig::GREGORIAN;
            assert_eq!(
                to_day_count(case.date, &config),
                Ok(case.day_count),
                "to_day_count for {} ({})",
                case.date,
                case.description
            );
            assert_eq!(
                from_day_count(case.day_count, &config),
                Ok(case.date),
                "from_day_count for {} ({})",
                case.day_count,
                case.description
            );
        }
    }

    #[test]
    fn test_consecutive_days_across_leap_day() {
        let config = CalendarConfig::GREGORIAN;
        let feb_28 = to_day_count(date(2024, 2, 28), &config).expect("valid date");
        assert_eq!(from_day_count(feb_28 + 1, &config), Ok(date(2024, 2, 29)));
        assert_eq!(from_day_count(feb_28 + 2, &config), Ok(date(2024, 3, 1)));

        let feb_28 = to_day_count(date(1900, 2, 28), &config).expect("valid date");
        assert_eq!(from_day_count(feb_28 + 1, &config), Ok(date(1900, 3, 1)));
    }

    #[test]
    fn test_round_trip_every_day_of_a_cycle() {
        let config = CalendarConfig::GREGORIAN;
        let start = to_day_count(date(1600, 1, 1), &config).expect("valid date");
        let mut expected = date(1600, 1, 1);
        for day_count in start..start + GREGORIAN_CYCLE_DAYS {
            let civil = from_day_count(day_count, &config).expect("in range");
            assert_eq!(civil, expected, "day count {day_count}");
            assert_eq!(to_day_count(civil, &config), Ok(day_count));
            expected = next_day(expected);
        }
        assert_eq!(from_day_count(start + GREGORIAN_CYCLE_DAYS, &config), Ok(date(2000, 1, 1)));
    }

    fn next_day(d: CivilDate) -> CivilDate {
        if d.day < crate::types::days_in_month(d.year, d.month) {
            date(d.year, d.month, d.day + 1)
        } else if d.month < 12 {
            date(d.year, d.month + 1, 1)
        } else {
            date(d.year + 1, 1, 1)
        }
    }

    #[test]
    fn test_shifted_epoch() {
        // Year 1 of this calendar starts one Gregorian year late.
        let config = config_with_epoch(366);
        assert_eq!(to_day_count(date(1, 1, 1), &config), Ok(366));
        assert_eq!(from_day_count(366, &config), Ok(date(1, 1, 1)));
        assert_eq!(from_day_count(365, &config), Ok(date(0, 12, 31)));

        let gregorian = to_day_count(date(2020, 6, 1), &CalendarConfig::GREGORIAN).expect("valid date");
        let shifted = to_day_count(date(2020, 6, 1), &config).expect("valid date");
        assert_eq!(shifted - gregorian, 365);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        let config = CalendarConfig::GREGORIAN;
        for (year, month, day) in [(2021, 2, 29), (2020, 13, 1), (2020, 0, 1), (2020, 4, 31), (2020, 1, 0)] {
            assert_eq!(
                to_day_count(date(year, month, day), &config),
                Err(CalendarError::InvalidDate { year, month, day }),
                "{year}-{month}-{day} should be rejected"
            );
        }
    }

    #[test]
    fn test_out_of_range_day_counts() {
        let config = CalendarConfig::GREGORIAN;
        assert_eq!(from_day_count(i64::MIN, &config), Err(CalendarError::OutOfRange));
        assert_eq!(from_day_count(i64::MAX, &config), Err(CalendarError::OutOfRange));

        let last = to_day_count(date(i32::MAX, 12, 31), &config).expect("valid date");
        assert_eq!(from_day_count(last, &config), Ok(date(i32::MAX, 12, 31)));
        assert_eq!(from_day_count(last + 1, &config), Err(CalendarError::OutOfRange));

        let first = to_day_count(date(i32::MIN, 1, 1), &config).expect("valid date");
        assert_eq!(from_day_count(first, &config), Ok(date(i32::MIN, 1, 1)));
    }

    #[test]
    fn test_extreme_epochs_stay_in_range() {
        for epoch in [MAX_EPOCH, -MAX_EPOCH] {
            let config = CalendarConfig::new(epoch, 1, 7).expect("epoch within bounds");
            for civil in [date(i32::MIN, 1, 1), date(1, 1, 1), date(i32::MAX, 12, 31)] {
                let day_count = to_day_count(civil, &config).expect("valid date");
                assert_eq!(from_day_count(day_count, &config), Ok(civil), "Epoch {epoch}");
            }
            for civil in [date(1, 1, 1), date(2021, 1, 4)] {
                let (week_year, week) = week_of_year(civil, &config).expect("week within range");
                let period = week_range(week_year, week, &config).expect("week within range");
                assert!(period.contains(&civil), "Epoch {epoch}, {civil}");
            }
        }
    }

    #[test]
    fn test_iso_days_carry_fraction() {
        let config = CalendarConfig::GREGORIAN;
        let fraction = DayFraction {
            parts:         43_200,
            parts_per_day: 86_400,
        };
        let iso_days = to_iso_days(date(1970, 1, 1), Some(fraction), &config).expect("valid date");
        assert_eq!(iso_days.days, 719_163);
        assert_eq!(iso_days.fraction, Some(fraction));

        let (civil, carried) = from_iso_days(iso_days, &config).expect("in range");
        assert_eq!(civil, date(1970, 1, 1));
        assert_eq!(carried, Some(fraction));
    }
}
