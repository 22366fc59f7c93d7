use crate::config::CalendarConfig;
use crate::range::PeriodRange;
use crate::types::CivilDate;

pub const fn date(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day)
}

pub fn range(first: (i32, u8, u8), last: (i32, u8, u8)) -> PeriodRange {
    PeriodRange::new(first.into(), last.into()).expect("failed to create test range")
}

/// ISO week rules with a custom epoch
pub fn config_with_epoch(epoch: i64) -> CalendarConfig {
    CalendarConfig::builder()
        .epoch(epoch)
        .build()
        .expect("failed to create test configuration")
}
