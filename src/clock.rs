//! Sources of "today".

use chrono::Local;

use crate::CalendarDate;

/// Supplies the current local calendar date. Time of day is never observed.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads today's date from the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::saturating_from(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
