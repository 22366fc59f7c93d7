use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A (year, month, day) triple under some calendar's rules.
///
/// Validity depends on the calendar, so constructing one never fails; the
/// engine checks it whenever a date is handed in. Ordering is civil order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CivilDate {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Coarse year-numbering partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Era {
    /// Years 0 and earlier, numbered `1 - year`.
    #[display(fmt = "BCE")]
    BeforeCommon = 0,
    /// Years 1 and later.
    #[display(fmt = "CE")]
    Common = 1,
}

impl Era {
    /// Returns the numeric era index (0 or 1)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Unit of a signed increment passed to [`plus`](crate::plus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "quarters")]
    Quarters,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "days")]
    Days,
}

/// What to do when a month-based addition lands on a day the target month
/// does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Clamp the day to the last day of the target month.
    #[default]
    Constrain,
    /// Fail with `InvalidDate`.
    Reject,
}

/// Options for [`plus`](crate::plus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlusOptions {
    pub overflow: Overflow,
}

impl PlusOptions {
    pub const fn reject() -> Self {
        Self {
            overflow: Overflow::Reject,
        }
    }
}

// Helper functions over the proleptic Gregorian structure

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
