use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DECEMBER, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, LONG_MONTH_DAYS, MAX_MONTH, MAX_YEAR,
    MIN_DAY, MIN_YEAR, MONTH_NAMES,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

const fn non_zero_u16(value: u16) -> NonZeroU16 {
    match NonZeroU16::new(value) {
        Some(value) => value,
        None => panic!("zero is not a valid calendar component"),
    }
}

const fn non_zero_u8(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(value) => value,
        None => panic!("zero is not a valid calendar component"),
    }
}

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Earliest representable year
    pub const MIN: Self = Self(non_zero_u16(MIN_YEAR));
    /// Latest representable year
    pub const MAX: Self = Self(non_zero_u16(MAX_YEAR));

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Shifts the year by `delta`, returning `None` when the result leaves `1..=MAX_YEAR`
    pub fn checked_offset(self, delta: i32) -> Option<Self> {
        let shifted = i32::from(self.get()).checked_add(delta)?;
        u16::try_from(shifted).ok().and_then(|value| Self::new(value).ok())
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(non_zero_u8(JANUARY));
    pub const DECEMBER: Self = Self(non_zero_u8(DECEMBER));

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month, as shown on badges and headings
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.get() - 1) as usize]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=MAX_MONTH).filter_map(|value| Self::new(value).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(non_zero_u8(MIN_DAY));

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Last day of the given month
    pub fn last_of(year: Year, month: Month) -> Self {
        NonZeroU8::new(days_in_month(year, month)).map_or(Self::FIRST, Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the widest month is known
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= LONG_MONTH_DAYS => Ok(Self(non_zero)),
            _ => Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in the given month (28..=31): the day before the first of the next month
pub fn days_in_month(year: Year, month: Month) -> u8 {
    let (next_year, next_month) = if month == Month::DECEMBER {
        (i32::from(year.get()) + 1, JANUARY)
    } else {
        (i32::from(year.get()), month.get() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, u32::from(next_month), u32::from(MIN_DAY))
        .and_then(|first| first.pred_opt())
        .and_then(|last| u8::try_from(last.day()).ok())
        .unwrap_or(LONG_MONTH_DAYS)
}

/// Every day of the given month in order
pub fn days_of(year: Year, month: Month) -> impl Iterator<Item = Day> {
    (MIN_DAY..=days_in_month(year, month)).filter_map(move |value| Day::new(value, year, month).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{month, year};

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_constants() {
        assert_eq!(Year::MIN.get(), 1);
        assert_eq!(Year::MAX.get(), 9999);
    }

    #[test]
    fn test_year_checked_offset() {
        assert_eq!(year(2024).checked_offset(-3), Some(year(2021)));
        assert_eq!(year(2024).checked_offset(5), Some(year(2029)));
        assert_eq!(year(2).checked_offset(-2), None);
        assert_eq!(year(9998).checked_offset(2), None);
    }

    #[test]
    fn test_year_serde() {
        let json = serde_json::to_string(&year(2024)).expect("failed to serialize year");
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).expect("failed to deserialize year");
        assert_eq!(parsed, year(2024));

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::JANUARY.name(), "January");
        assert_eq!(month(6).name(), "June");
        assert_eq!(Month::DECEMBER.name(), "December");
    }

    #[test]
    fn test_month_all_in_order() {
        let values: Vec<u8> = Month::all().map(Month::get).collect();
        assert_eq!(values, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&month(8)).expect("failed to serialize month");
        assert_eq!(json, "8");
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_day_new_respects_month_length() {
        assert!(Day::new(31, year(2024), month(1)).is_ok());
        assert!(Day::new(28, year(2023), month(2)).is_ok());
        assert!(Day::new(29, year(2023), month(2)).is_err());
        assert!(Day::new(29, year(2024), month(2)).is_ok());
        assert!(Day::new(30, year(2024), month(2)).is_err());
        assert!(Day::new(30, year(2024), month(4)).is_ok());
        assert!(Day::new(31, year(2024), month(4)).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, year(2024), month(1));
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 0
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().expect("15 is a valid day");
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_last_of() {
        assert_eq!(Day::last_of(year(2024), month(2)).get(), 29);
        assert_eq!(Day::last_of(year(2023), month(2)).get(), 28);
        assert_eq!(Day::last_of(year(2023), month(12)).get(), 31);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_matches_calendar() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (m, days) in Month::all().zip(expected) {
            assert_eq!(days_in_month(year(2023), m), days, "Month {m} has incorrect day count");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(year(2024), month(2)), 29);
        assert_eq!(days_in_month(year(2000), month(2)), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(year(2023), month(2)), 28);
        assert_eq!(days_in_month(year(1900), month(2)), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_month_calendar_edges() {
        assert_eq!(days_in_month(Year::MAX, Month::DECEMBER), 31, "rolls into year 10000");
        assert_eq!(days_in_month(Year::MIN, Month::JANUARY), 31);
        assert_eq!(days_in_month(year(2024), month(12)), 31);
    }

    #[test]
    fn test_days_of_counts_whole_month() {
        assert_eq!(days_of(year(2024), month(2)).count(), 29);
        assert_eq!(days_of(year(2023), month(2)).count(), 28);
        assert_eq!(days_of(year(2024), month(9)).last().map(Day::get), Some(30));
    }
}
