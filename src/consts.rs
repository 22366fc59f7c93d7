/// Number of months in every calendar year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Number of quarters in every calendar year
pub const QUARTERS_IN_YEAR: u8 = 4;

/// Number of months in a quarter
pub const MONTHS_IN_QUARTER: u8 = 3;

/// Number of days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// ISO weekday number for Monday
pub const MONDAY: u8 = 1;
/// ISO weekday number for Sunday
pub const SUNDAY: u8 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Day count of 0001-01-01 in the unmodified proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: i64 = 1;

/// Largest epoch magnitude a configuration accepts. Day counts of every
/// `i32` year under such an epoch stay far inside `i64`.
pub const MAX_EPOCH: i64 = 1 << 48;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// 97 leap years and 303 common years
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 97 * 366 + 303 * 365;
/// A century without its closing leap day
pub(crate) const GREGORIAN_CENTURY_DAYS: i64 = 24 * 366 + 76 * 365;
/// Three common years and one leap year
pub(crate) const GREGORIAN_QUADRENNIUM_DAYS: i64 = 3 * 365 + 366;
