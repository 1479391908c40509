use serde::{Deserialize, Serialize};

use crate::{DEFAULT_YEARS_AFTER, DEFAULT_YEARS_BEFORE, Year, config::ConfigError};

/// How many years the window shows on each side of the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRange {
    pub before: u16,
    pub after:  u16,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            before: DEFAULT_YEARS_BEFORE,
            after:  DEFAULT_YEARS_AFTER,
        }
    }
}

/// The bounded, ascending run of selectable years centered on a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWindow {
    reference: Year,
    first:     Year,
    last:      Year,
}

impl YearWindow {
    /// Creates the window `[reference - before, reference + after]`.
    ///
    /// # Errors
    /// Returns `ConfigError::YearWindowOutOfRange` if either end leaves `1..=9999`.
    pub fn new(reference: Year, range: YearRange) -> Result<Self, ConfigError> {
        let out_of_range = ConfigError::YearWindowOutOfRange {
            reference,
            before: range.before,
            after: range.after,
        };
        let first = reference
            .checked_offset(-i32::from(range.before))
            .ok_or_else(|| out_of_range.clone())?;
        let last = reference.checked_offset(i32::from(range.after)).ok_or(out_of_range)?;
        Ok(Self { reference, first, last })
    }

    pub const fn reference(&self) -> Year {
        self.reference
    }

    pub const fn first(&self) -> Year {
        self.first
    }

    pub const fn last(&self) -> Year {
        self.last
    }

    /// Number of years in the window, `before + after + 1`
    pub const fn len(&self) -> usize {
        (self.last.get() - self.first.get()) as usize + 1
    }

    /// Never true; a window always holds at least its reference year
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: Year) -> bool {
        self.first <= year && year <= self.last
    }

    /// Years of the window in ascending order
    pub fn years(&self) -> impl Iterator<Item = Year> {
        (self.first.get()..=self.last.get()).filter_map(|value| Year::new(value).ok())
    }
}
