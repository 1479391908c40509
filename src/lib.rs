//! Selection core of a date-picker widget.
//!
//! A [`DateSelector`] walks the user through year, month and day, in that order,
//! over a bounded [`YearWindow`]. Candidates may be disabled by the `date_future`
//! and `date_past` flags or an inclusive [`DateRange`]; the predicates are free
//! functions in [`constraint`] so a renderer can gray out options without
//! duplicating the rules. Rendering itself is left to the host; [`Panel`] is a
//! snapshot of what to draw.
//!
//! ```
//! use date_selector::{CalendarDate, DateSelector, FixedClock, Options, Outcome};
//!
//! let today = CalendarDate::new(2024, 6, 15)?;
//! let options = Options { date_future: true, ..Options::default() };
//! let mut picker = DateSelector::with_clock(&options, FixedClock(today))?;
//!
//! picker.open();
//! picker.select_year(2024);
//! assert!(picker.select_month(4).is_ignored());
//! picker.select_month(6);
//! picker.select_day(20);
//! assert_eq!(picker.commit(), Outcome::Committed(CalendarDate::new(2024, 6, 20)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod config;
mod consts;
mod date;
mod prelude;
mod range;
mod selector;
mod types;
mod view;
mod window;

pub mod constraint;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Align, ConfigError, DatePickerConfig, Options};
pub use constraint::Constraints;
pub use consts::*;
pub use date::{CalendarDate, PartialDate};
pub use range::{DateRange, RangeError};
pub use selector::{Action, DateSelector, Outcome, SelectorState, Step};
pub use types::{Day, Month, Year, days_in_month, days_of, is_leap_year};
pub use view::{Badges, Choice, Panel, PanelBody};
pub use window::{YearRange, YearWindow};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
