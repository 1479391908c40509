//! Shorthand constructors for tests.

use crate::{CalendarDate, Day, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month should be valid")
}

pub fn day(value: u8, y: u16, m: u8) -> Day {
    Day::new(value, year(y), month(m)).expect("test day should be valid")
}

pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).expect("test date should be valid")
}
