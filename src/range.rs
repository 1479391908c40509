use std::{fmt, str::FromStr};

use crate::{CalendarDate, OPEN_RANGE_END, ParseError, PartialDate, RANGE_SEPARATOR};

/// An inclusive range of calendar dates. Either end may be open.
/// Ranges built with `new` have start <= end; an inverted range admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// A range with no bounds at all
    pub const UNBOUNDED: Self = Self { start: None, end: None };

    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self, RangeError> {
        match (start, end) {
            (Some(start), Some(end)) if start > end => Err(RangeError::InvalidRange { start, end }),
            _ => Ok(Self { start, end }),
        }
    }

    /// Creates a range as configured, without ordering the ends
    pub(crate) const fn unchecked(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// Returns the start date of the range, if bounded below
    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Returns the end date of the range, if bounded above
    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Checks if the range contains a given date (both ends inclusive)
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }

    /// Checks if any concrete date covered by `date` falls within the range.
    /// A year is admitted when some day of it is in range, likewise a month.
    pub fn admits(&self, date: &PartialDate) -> bool {
        self.start.is_none_or(|start| start <= date.upper_bound_inclusive())
            && self.end.is_none_or(|end| date.lower_bound() <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.map_or_else(|| OPEN_RANGE_END.to_owned(), |date| date.to_string());
        let end = self.end.map_or_else(|| OPEN_RANGE_END.to_owned(), |date| date.to_string());
        write!(f, "{start}{RANGE_SEPARATOR}{end}")
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                let start = parse_end(start_str)?;
                let end = parse_end(end_str)?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_end(s: &str) -> Result<Option<CalendarDate>, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == OPEN_RANGE_END {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
