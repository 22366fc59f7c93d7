//! Error types for calendar computations.

use crate::types::CivilDate;

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside 1-12, or day outside 1 to the length of the month.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// A configuration field is outside its declared range.
    #[error("Invalid calendar configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: i64 },

    /// A quarter or week index does not exist in the requested year.
    #[error("Invalid {period}: {value}")]
    InvalidPeriod { period: &'static str, value: i64 },

    /// A period range whose first day comes after its last day.
    #[error("Invalid period range: first ({first}) is after last ({last})")]
    InvalidRange { first: CivilDate, last: CivilDate },

    /// The result of an arithmetic operation cannot be represented.
    #[error("Date arithmetic out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, CalendarError>;
