//! Calendar configuration: the immutable parameter set describing one
//! calendar variant.
//!
//! A configuration is validated exactly once, when it is built. Every engine
//! function takes a `&CalendarConfig` and trusts its fields.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DAYS_IN_WEEK, GREGORIAN_EPOCH, MAX_EPOCH, MONDAY, SUNDAY};
use crate::error::{CalendarError, Result};
use crate::prelude::*;

/// Era and leap-year rule family of a calendar.
///
/// The engine forwards this tag to callers but never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CalendarType {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
}

/// Parameters of one calendar variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarConfig", into = "RawCalendarConfig")]
pub struct CalendarConfig {
    epoch:                  i64,
    first_day_of_week:      u8,
    min_days_in_first_week: u8,
    calendar_type:          CalendarType,
}

impl CalendarConfig {
    /// The proleptic Gregorian calendar with ISO-8601 weeks (Monday start,
    /// week 1 holds at least four days of the year).
    pub const GREGORIAN: Self = Self::from_parts(GREGORIAN_EPOCH, MONDAY, 4);

    /// The proleptic Gregorian calendar with US weeks (Sunday start, week 1
    /// is the week containing January 1).
    pub const US: Self = Self::from_parts(GREGORIAN_EPOCH, SUNDAY, 1);

    const fn from_parts(epoch: i64, first_day_of_week: u8, min_days_in_first_week: u8) -> Self {
        Self {
            epoch,
            first_day_of_week,
            min_days_in_first_week,
            calendar_type: CalendarType::Gregorian,
        }
    }

    /// Creates a validated Gregorian-family configuration.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfiguration` if `first_day_of_week`
    /// or `min_days_in_first_week` is outside 1-7, or if `epoch` is farther
    /// than [`MAX_EPOCH`] from zero.
    pub fn new(epoch: i64, first_day_of_week: u8, min_days_in_first_week: u8) -> Result<Self> {
        Self::builder()
            .epoch(epoch)
            .first_day_of_week(first_day_of_week)
            .min_days_in_first_week(min_days_in_first_week)
            .build()
    }

    pub const fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder {
            config: Self::GREGORIAN,
        }
    }

    /// Day count of day 1 of year 1 of this calendar
    #[inline]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// ISO weekday (1 = Monday) that starts a week
    #[inline]
    pub const fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    /// Alias of [`first_day_of_week`](Self::first_day_of_week)
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    #[inline]
    pub const fn min_days_in_first_week(&self) -> u8 {
        self.min_days_in_first_week
    }

    #[inline]
    pub const fn calendar_type(&self) -> CalendarType {
        self.calendar_type
    }

    /// Difference between this calendar's epoch and the Gregorian one
    #[inline]
    pub(crate) const fn epoch_shift(&self) -> i64 {
        self.epoch - GREGORIAN_EPOCH
    }

    fn validate(self) -> Result<Self> {
        check_epoch(self.epoch)?;
        check_week_field("first_day_of_week", self.first_day_of_week)?;
        check_week_field("min_days_in_first_week", self.min_days_in_first_week)?;
        Ok(self)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::GREGORIAN
    }
}

fn check_epoch(epoch: i64) -> Result<()> {
    if (-MAX_EPOCH..=MAX_EPOCH).contains(&epoch) {
        Ok(())
    } else {
        debug!(epoch, "rejecting calendar configuration");
        Err(CalendarError::InvalidConfiguration {
            field: "epoch",
            value: epoch,
        })
    }
}

fn check_week_field(field: &'static str, value: u8) -> Result<()> {
    if (1..=DAYS_IN_WEEK).contains(&value) {
        Ok(())
    } else {
        debug!(field, value, "rejecting calendar configuration");
        Err(CalendarError::InvalidConfiguration {
            field,
            value: i64::from(value),
        })
    }
}

/// Builder for [`CalendarConfig`], starting from [`CalendarConfig::GREGORIAN`].
#[derive(Debug, Clone, Copy)]
pub struct CalendarConfigBuilder {
    config: CalendarConfig,
}

impl CalendarConfigBuilder {
    #[must_use]
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.config.epoch = epoch;
        self
    }

    #[must_use]
    pub const fn first_day_of_week(mut self, day: u8) -> Self {
        self.config.first_day_of_week = day;
        self
    }

    #[must_use]
    pub const fn min_days_in_first_week(mut self, days: u8) -> Self {
        self.config.min_days_in_first_week = days;
        self
    }

    #[must_use]
    pub const fn calendar_type(mut self, calendar_type: CalendarType) -> Self {
        self.config.calendar_type = calendar_type;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfiguration` for any field outside
    /// its declared range.
    pub fn build(self) -> Result<CalendarConfig> {
        self.config.validate()
    }
}

/// Unvalidated wire form of [`CalendarConfig`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCalendarConfig {
    epoch:                  i64,
    first_day_of_week:      u8,
    min_days_in_first_week: u8,
    #[serde(default)]
    calendar_type:          CalendarType,
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = CalendarError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self> {
        CalendarConfig::builder()
            .epoch(raw.epoch)
            .first_day_of_week(raw.first_day_of_week)
            .min_days_in_first_week(raw.min_days_in_first_week)
            .calendar_type(raw.calendar_type)
            .build()
    }
}

impl From<CalendarConfig> for RawCalendarConfig {
    fn from(config: CalendarConfig) -> Self {
        Self {
            epoch:                  config.epoch,
            first_day_of_week:      config.first_day_of_week,
            min_days_in_first_week: config.min_days_in_first_week,
            calendar_type:          config.calendar_type,
        }
    }
}
