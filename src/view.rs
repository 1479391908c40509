//! One render pass worth of picker state, ready for a renderer to draw.

use std::fmt;

use crate::{Align, CalendarDate, Clock, DateSelector, Day, Month, PartialDate, Year, constraint, days_of};

/// A candidate option and whether it can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<T> {
    pub value:    T,
    pub disabled: bool,
}

/// The field badges shown above the grid. Tapping one clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Badges {
    pub year:  Option<Year>,
    pub month: Option<Month>,
    pub day:   Option<Day>,
}

/// What the panel body shows for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PanelBody {
    Years(Vec<Choice<Year>>),
    Months { year: Year, months: Vec<Choice<Month>> },
    Days { year: Year, month: Month, days: Vec<Choice<Day>> },
    Confirm(CalendarDate),
}

impl fmt::Display for PanelBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(_) => f.write_str("Select Year"),
            Self::Months { .. } => f.write_str("Select Month"),
            Self::Days { .. } => f.write_str("Select Date"),
            Self::Confirm(date) => write!(
                f,
                "Selected: {} - {} - {}",
                date.day(),
                date.month().name(),
                date.year()
            ),
        }
    }
}

/// Snapshot of an open panel. "Today" is read once for the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panel {
    pub align:  Align,
    pub today:  CalendarDate,
    pub badges: Badges,
    pub body:   PanelBody,
}

impl Panel {
    /// The step heading
    pub fn heading(&self) -> String {
        self.body.to_string()
    }
}

impl<C: Clock> DateSelector<C> {
    /// Builds the snapshot for one render pass, or `None` while the panel is closed.
    pub fn panel(&self) -> Option<Panel> {
        if !self.is_open() {
            return None;
        }
        let today = self.today();
        let constraints = self.config().constraints();

        let body = match self.selection() {
            None => PanelBody::Years(
                self.year_window()
                    .years()
                    .map(|year| Choice {
                        value:    year,
                        disabled: constraint::year_disabled(constraints, today, year),
                    })
                    .collect(),
            ),
            Some(PartialDate::Year { year }) => PanelBody::Months {
                year,
                months: Month::all()
                    .map(|month| Choice {
                        value:    month,
                        disabled: constraint::month_disabled(constraints, today, year, month),
                    })
                    .collect(),
            },
            Some(PartialDate::Month { year, month }) => PanelBody::Days {
                year,
                month,
                days: days_of(year, month)
                    .map(|day| Choice {
                        value:    day,
                        disabled: constraint::day_of_month_disabled(constraints, today, year, month, day),
                    })
                    .collect(),
            },
            Some(PartialDate::Day(date)) => PanelBody::Confirm(date),
        };

        Some(Panel {
            align: self.config().align(),
            today,
            badges: Badges {
                year:  self.selected_year(),
                month: self.selected_month().or(self.pending_month()),
                day:   self.selected_day(),
            },
            body,
        })
    }
}
