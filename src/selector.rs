use std::fmt;

use crate::{
    CalendarDate, Clock, ConfigError, DatePickerConfig, Day, Month, Options, PartialDate, SystemClock, Year,
    YearWindow, constraint, prelude::*,
};

/// Where the picker stands, derived from the panel flag and the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Step {
    #[display(fmt = "closed")]
    Closed,
    #[display(fmt = "pick year")]
    PickYear,
    #[display(fmt = "pick month")]
    PickMonth,
    #[display(fmt = "pick day")]
    PickDay,
    #[display(fmt = "confirm")]
    Confirm,
}

/// A discrete user action. Candidate values are raw numbers as a renderer sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Action {
    #[display(fmt = "open")]
    Open,
    #[display(fmt = "close")]
    Close,
    #[display(fmt = "select year {_0}")]
    SelectYear(u16),
    #[display(fmt = "select month {_0}")]
    SelectMonth(u8),
    #[display(fmt = "select day {_0}")]
    SelectDay(u8),
    #[display(fmt = "clear year")]
    ClearYear,
    #[display(fmt = "clear month")]
    ClearMonth,
    #[display(fmt = "clear day")]
    ClearDay,
    #[display(fmt = "commit")]
    Commit,
}

/// Panel flag plus selection. The selection is a `PartialDate`, so a month
/// never exists without its year and a day never without its month.
/// A month seeded without a year waits in `pending_month` until a year is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectorState {
    open:          bool,
    selection:     Option<PartialDate>,
    pending_month: Option<Month>,
}

impl SelectorState {
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn selection(&self) -> Option<PartialDate> {
        self.selection
    }

    pub const fn step(&self) -> Step {
        if !self.open {
            return Step::Closed;
        }
        match self.selection {
            None => Step::PickYear,
            Some(PartialDate::Year { .. }) => Step::PickMonth,
            Some(PartialDate::Month { .. }) => Step::PickDay,
            Some(PartialDate::Day(_)) => Step::Confirm,
        }
    }

    pub const fn selected_year(&self) -> Option<Year> {
        match self.selection {
            Some(selection) => Some(selection.year()),
            None => None,
        }
    }

    pub const fn selected_month(&self) -> Option<Month> {
        match self.selection {
            Some(selection) => selection.month(),
            None => None,
        }
    }

    pub const fn selected_day(&self) -> Option<Day> {
        match self.selection {
            Some(selection) => selection.day(),
            None => None,
        }
    }

    /// Seeded month still waiting for a year
    pub const fn pending_month(&self) -> Option<Month> {
        self.pending_month
    }

    const fn with_selection(self, selection: Option<PartialDate>) -> Self {
        Self { selection, ..self }
    }

    const fn closed(self) -> Self {
        Self { open: false, ..self }
    }
}

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The state changed; `from` and `to` may be equal when only the selection was reset.
    Moved { from: Step, to: Step },
    /// The selection was committed and the panel closed.
    Committed(CalendarDate),
    /// The action did not apply and nothing changed.
    Ignored,
}

impl Outcome {
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

type CommitCallback = Box<dyn FnMut(CalendarDate)>;

/// The selection core of a date picker: a year, month, day state machine over
/// an immutable configuration.
pub struct DateSelector<C = SystemClock> {
    config:           DatePickerConfig,
    clock:            C,
    state:            SelectorState,
    on_date_selected: Option<CommitCallback>,
}

impl DateSelector<SystemClock> {
    /// Creates a closed picker reading today from the system clock.
    ///
    /// # Errors
    /// Returns `ConfigError` if the options do not resolve.
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> DateSelector<C> {
    /// Creates a closed picker with an explicit source of today.
    ///
    /// # Errors
    /// Returns `ConfigError` if the options do not resolve.
    pub fn with_clock(options: &Options, clock: C) -> Result<Self, ConfigError> {
        let config = options.resolve(clock.today())?;
        Ok(Self {
            config,
            clock,
            state: SelectorState::default(),
            on_date_selected: None,
        })
    }

    /// Registers the callback invoked once per commit with the chosen date.
    #[must_use]
    pub fn on_date_selected(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.on_date_selected = Some(Box::new(callback));
        self
    }

    pub const fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    pub const fn year_window(&self) -> &YearWindow {
        self.config.year_window()
    }

    pub const fn state(&self) -> SelectorState {
        self.state
    }

    pub const fn step(&self) -> Step {
        self.state.step()
    }

    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub const fn selection(&self) -> Option<PartialDate> {
        self.state.selection()
    }

    pub const fn selected_year(&self) -> Option<Year> {
        self.state.selected_year()
    }

    pub const fn selected_month(&self) -> Option<Month> {
        self.state.selected_month()
    }

    pub const fn selected_day(&self) -> Option<Day> {
        self.state.selected_day()
    }

    pub const fn pending_month(&self) -> Option<Month> {
        self.state.pending_month()
    }

    /// Today according to the picker's clock
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    pub fn is_year_disabled(&self, year: Year) -> bool {
        constraint::year_disabled(self.config.constraints(), self.today(), year)
    }

    pub fn is_month_disabled(&self, year: Year, month: Month) -> bool {
        constraint::month_disabled(self.config.constraints(), self.today(), year, month)
    }

    pub fn is_day_disabled(&self, date: CalendarDate) -> bool {
        constraint::day_disabled(self.config.constraints(), self.today(), date)
    }

    pub fn open(&mut self) -> Outcome {
        self.dispatch(Action::Open)
    }

    pub fn close(&mut self) -> Outcome {
        self.dispatch(Action::Close)
    }

    pub fn select_year(&mut self, year: u16) -> Outcome {
        self.dispatch(Action::SelectYear(year))
    }

    /// Selects a month, `1` being January.
    pub fn select_month(&mut self, month: u8) -> Outcome {
        self.dispatch(Action::SelectMonth(month))
    }

    pub fn select_day(&mut self, day: u8) -> Outcome {
        self.dispatch(Action::SelectDay(day))
    }

    pub fn clear_year(&mut self) -> Outcome {
        self.dispatch(Action::ClearYear)
    }

    pub fn clear_month(&mut self) -> Outcome {
        self.dispatch(Action::ClearMonth)
    }

    pub fn clear_day(&mut self) -> Outcome {
        self.dispatch(Action::ClearDay)
    }

    pub fn commit(&mut self) -> Outcome {
        self.dispatch(Action::Commit)
    }

    /// Applies one action. Actions that do not apply to the current step,
    /// name an invalid value or a disabled option are ignored.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let from = self.state.step();
        let Some(next) = self.transition(action) else {
            log::debug!("ignored '{action}' in step '{from}'");
            return Outcome::Ignored;
        };
        self.state = next;
        let to = next.step();
        log::trace!("'{action}': '{from}' -> '{to}'");

        match (action, next.selection) {
            (Action::Commit, Some(PartialDate::Day(date))) => {
                self.deliver(date);
                Outcome::Committed(date)
            },
            _ => Outcome::Moved { from, to },
        }
    }

    fn deliver(&mut self, date: CalendarDate) {
        match self.on_date_selected.as_mut() {
            Some(callback) => {
                log::debug!("committing {date}");
                callback(date);
            },
            None => log::warn!("committed {date} with no date-selected callback registered"),
        }
    }

    /// The single state-update rule. `None` means the action is a no-op.
    fn transition(&self, action: Action) -> Option<SelectorState> {
        let state = self.state;
        let constraints = self.config.constraints();

        match (state.open, action, state.selection) {
            (_, Action::Open, _) => Some(SelectorState {
                open:          true,
                selection:     self.config.seed(),
                pending_month: self.config.month_seed(),
            }),
            (false, ..) => None,
            (true, Action::Close, _) | (true, Action::Commit, Some(PartialDate::Day(_))) => Some(state.closed()),

            (true, Action::SelectYear(value), None) => {
                let year = Year::new(value).ok()?;
                let selectable = self.config.year_window().contains(year)
                    && !constraint::year_disabled(constraints, self.today(), year);
                if !selectable {
                    return None;
                }
                // A pending month rides along unless it is disabled in the chosen year
                let selection = match state.pending_month {
                    Some(month) if !constraint::month_disabled(constraints, self.today(), year, month) => {
                        PartialDate::Month { year, month }
                    },
                    _ => PartialDate::Year { year },
                };
                Some(SelectorState {
                    open:          true,
                    selection:     Some(selection),
                    pending_month: None,
                })
            },
            (true, Action::SelectMonth(value), Some(PartialDate::Year { year })) => {
                let month = Month::new(value).ok()?;
                (!constraint::month_disabled(constraints, self.today(), year, month))
                    .then(|| state.with_selection(Some(PartialDate::Month { year, month })))
            },
            (true, Action::SelectDay(value), Some(PartialDate::Month { year, month })) => {
                let day = Day::new(value, year, month).ok()?;
                let date = CalendarDate::from_parts(year, month, day);
                (!constraint::day_disabled(constraints, self.today(), date))
                    .then(|| state.with_selection(Some(PartialDate::Day(date))))
            },

            // Clearing a field drops it and everything finer
            (true, Action::ClearYear, Some(_)) => Some(state.with_selection(None)),
            (true, Action::ClearMonth, None) => state.pending_month.map(|_| SelectorState {
                pending_month: None,
                ..state
            }),
            (true, Action::ClearMonth, Some(current @ (PartialDate::Month { .. } | PartialDate::Day(_)))) => {
                Some(state.with_selection(Some(PartialDate::Year { year: current.year() })))
            },
            (true, Action::ClearDay, Some(current @ PartialDate::Day(_))) => Some(state.with_selection(current.coarser())),

            _ => None,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for DateSelector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateSelector")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("state", &self.state)
            .field("on_date_selected", &self.on_date_selected.is_some())
            .finish()
    }
}
