use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Constraints, DateRange, Month, PartialDate, Year, YearRange, YearWindow, prelude::*};

/// Which edge of the trigger the panel hangs from. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

/// Instantiation options as a host hands them over, typically from JSON.
/// Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Options {
    /// Reference date for the year window, today when absent
    pub default_date:     Option<CalendarDate>,
    pub align:            Align,
    /// Pre-selected year on every open
    pub default_year:     Option<Year>,
    /// Pre-selected month on every open; without `default_year` it applies once a year is picked
    pub default_month:    Option<Month>,
    pub date_future:      bool,
    pub date_past:        bool,
    pub date_range_start: Option<CalendarDate>,
    pub date_range_end:   Option<CalendarDate>,
    pub year_range:       YearRange,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Year window {reference}-{before}+{after} leaves the supported calendar (1-9999)")]
    YearWindowOutOfRange { reference: Year, before: u16, after: u16 },
}

impl Options {
    /// Resolves the options against `today` into an immutable configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if the year window leaves the calendar. Range bounds and
    /// flags are taken as given, even when they leave nothing selectable.
    pub fn resolve(&self, today: CalendarDate) -> Result<DatePickerConfig, ConfigError> {
        let reference = self.default_date.unwrap_or(today);
        let window = YearWindow::new(reference.year(), self.year_range)?;
        let range = DateRange::unchecked(self.date_range_start, self.date_range_end);

        let (seed, month_seed) = match (self.default_year, self.default_month) {
            (None, month) => (None, month),
            (Some(year), None) => (Some(PartialDate::Year { year }), None),
            (Some(year), Some(month)) => (Some(PartialDate::Month { year, month }), None),
        };

        let config = DatePickerConfig {
            align: self.align,
            reference,
            window,
            constraints: Constraints {
                date_future: self.date_future,
                date_past: self.date_past,
                range,
            },
            seed,
            month_seed,
        };
        log::debug!(
            "resolved date picker config: window {}..={}, range {}, future {}, past {}",
            window.first(),
            window.last(),
            range,
            self.date_future,
            self.date_past
        );
        Ok(config)
    }
}

/// Configuration fixed for the lifetime of one picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePickerConfig {
    align:       Align,
    reference:   CalendarDate,
    window:      YearWindow,
    constraints: Constraints,
    seed:        Option<PartialDate>,
    month_seed:  Option<Month>,
}

impl DatePickerConfig {
    pub const fn align(&self) -> Align {
        self.align
    }

    /// The date whose year centers the window
    pub const fn reference_date(&self) -> CalendarDate {
        self.reference
    }

    pub const fn year_window(&self) -> &YearWindow {
        &self.window
    }

    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Selection restored on every open
    pub const fn seed(&self) -> Option<PartialDate> {
        self.seed
    }

    /// Month pre-selected without a year, applied when the year is picked
    pub const fn month_seed(&self) -> Option<Month> {
        self.month_seed
    }
}
