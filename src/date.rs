use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::{
    DATE_SEPARATOR, MONTH_FIRST_SEPARATOR, ParseError, TIME_SEPARATOR,
    prelude::*,
    types::{Day, Month, Year},
};

/// A complete local calendar date. There is no time of day and no timezone.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// Creates a date from already validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw numbers, validating each component
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// 9999-12-31
    pub fn max() -> Self {
        Self::last_of_month(Year::MAX, Month::DECEMBER)
    }

    pub const fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    pub fn last_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::last_of(year, month),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Converts to a chrono date for hosts that work in chrono types
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
    }

    /// Converts a chrono date, clamping years outside `1..=9999` to the nearest representable date
    pub fn saturating_from(date: NaiveDate) -> Self {
        Self::try_from(date).unwrap_or_else(|_| if date.year() < 1 { Self::MIN } else { Self::max() })
    }

    /// Strips a trailing time of day (`YYYY-MM-DDThh:mm:ss…`), keeping only the date part
    fn date_part(s: &str) -> &str {
        s.split_once(TIME_SEPARATOR).map_or(s, |(date, _)| date)
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, ParseError> {
        match parts {
            [year, month, day] => Self::new(Self::parse_u16(year)?, Self::parse_u8(month)?, Self::parse_u8(day)?),
            _ => Err(ParseError::InvalidFormat(parts.join("-"))),
        }
    }

    fn parse_month_first(parts: &[&str]) -> Result<Self, ParseError> {
        match parts {
            [month, day, year] => Self::new(Self::parse_u16(year)?, Self::parse_u8(month)?, Self::parse_u8(day)?),
            _ => Err(ParseError::InvalidFormat(parts.join("/"))),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year.get(), self.month.get(), self.day.get())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);
        if has_slash {
            // Month-first format: MM/DD/YYYY
            if trimmed.contains(DATE_SEPARATOR) {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
                )));
            }
            let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
            return Self::parse_month_first(&parts);
        }

        // ISO format: YYYY-MM-DD, optionally followed by a time of day
        let parts: Vec<&str> = Self::date_part(trimmed).split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.len() {
            3 => Self::parse_iso(&parts),
            n => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {n} component(s): {s}"
            ))),
        }
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A date known to year, month or day precision.
/// Each value covers a span of concrete dates, from `lower_bound` to `upper_bound_inclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: Year },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month { year: Year, month: Month },
    /// Full date
    #[display(fmt = "{_0}")]
    Day(CalendarDate),
}

impl PartialDate {
    /// Returns the year component (always present)
    pub const fn year(&self) -> Year {
        match self {
            Self::Year { year } | Self::Month { year, .. } => *year,
            Self::Day(date) => date.year(),
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<Month> {
        match self {
            Self::Year { .. } => None,
            Self::Month { month, .. } => Some(*month),
            Self::Day(date) => Some(date.month()),
        }
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<Day> {
        match self {
            Self::Year { .. } | Self::Month { .. } => None,
            Self::Day(date) => Some(date.day()),
        }
    }

    /// Returns the complete date, if this is one
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Year { .. } | Self::Month { .. } => None,
        }
    }

    /// Earliest concrete date represented by this value.
    pub const fn lower_bound(&self) -> CalendarDate {
        match *self {
            Self::Year { year } => CalendarDate::first_of_month(year, Month::JANUARY),
            Self::Month { year, month } => CalendarDate::first_of_month(year, month),
            Self::Day(date) => date,
        }
    }

    /// Latest concrete date represented by this value (inclusive).
    pub fn upper_bound_inclusive(&self) -> CalendarDate {
        match *self {
            Self::Year { year } => CalendarDate::last_of_month(year, Month::DECEMBER),
            Self::Month { year, month } => CalendarDate::last_of_month(year, month),
            Self::Day(date) => date,
        }
    }

    /// Drops the least significant component: day to month, month to year, year to nothing.
    pub const fn coarser(&self) -> Option<Self> {
        match *self {
            Self::Year { .. } => None,
            Self::Month { year, .. } => Some(Self::Year { year }),
            Self::Day(date) => Some(Self::Month {
                year:  date.year(),
                month: date.month(),
            }),
        }
    }
}

impl From<CalendarDate> for PartialDate {
    fn from(date: CalendarDate) -> Self {
        Self::Day(date)
    }
}
