//! Validity predicates for candidate years, months and days.
//!
//! A candidate is disabled when the whole span of dates it covers falls outside
//! a constraint: a year is rejected by `date_future` only if every day of it is
//! before today, a month only if its last day is before today, and a day when
//! it is. The same rule applies at each granularity to `date_past` and to the
//! inclusive range. Disabled candidates are still offered, just not selectable.
//!
//! Flags and range are not checked against each other, so a configuration may
//! disable every date.

use crate::{CalendarDate, DateRange, Day, Month, PartialDate, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    /// Reject dates strictly before today
    pub date_future: bool,
    /// Reject dates strictly after today
    pub date_past:   bool,
    /// Inclusive bounds
    pub range:       DateRange,
}

impl Constraints {
    fn rejects(&self, today: CalendarDate, candidate: &PartialDate) -> bool {
        (self.date_future && candidate.upper_bound_inclusive() < today)
            || (self.date_past && candidate.lower_bound() > today)
            || !self.range.admits(candidate)
    }
}

pub fn year_disabled(constraints: &Constraints, today: CalendarDate, year: Year) -> bool {
    constraints.rejects(today, &PartialDate::Year { year })
}

pub fn month_disabled(constraints: &Constraints, today: CalendarDate, year: Year, month: Month) -> bool {
    constraints.rejects(today, &PartialDate::Month { year, month })
}

pub fn day_disabled(constraints: &Constraints, today: CalendarDate, date: CalendarDate) -> bool {
    constraints.rejects(today, &PartialDate::Day(date))
}

/// Same as [`day_disabled`] for callers holding the components separately.
pub fn day_of_month_disabled(
    constraints: &Constraints,
    today: CalendarDate,
    year: Year,
    month: Month,
    day: Day,
) -> bool {
    day_disabled(constraints, today, CalendarDate::from_parts(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, day, month, year};

    const TODAY: (u16, u8, u8) = (2024, 6, 15);

    fn today() -> CalendarDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    fn future() -> Constraints {
        Constraints {
            date_future: true,
            ..Constraints::default()
        }
    }

    fn past() -> Constraints {
        Constraints {
            date_past: true,
            ..Constraints::default()
        }
    }

    fn march_range() -> Constraints {
        Constraints {
            range: DateRange::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)))
                .expect("failed to construct March range"),
            ..Constraints::default()
        }
    }

    #[test]
    fn test_unconstrained_enables_everything() {
        let constraints = Constraints::default();
        assert!(!year_disabled(&constraints, today(), year(1)));
        assert!(!month_disabled(&constraints, today(), year(9999), month(12)));
        assert!(!day_disabled(&constraints, today(), date(1970, 1, 1)));
    }

    #[test]
    fn test_future_years() {
        let constraints = future();
        assert!(year_disabled(&constraints, today(), year(2023)));
        assert!(!year_disabled(&constraints, today(), year(2024)));
        assert!(!year_disabled(&constraints, today(), year(2025)));
    }

    #[test]
    fn test_future_months() {
        let constraints = future();
        assert!(month_disabled(&constraints, today(), year(2024), month(4)));
        assert!(month_disabled(&constraints, today(), year(2024), month(5)));
        assert!(!month_disabled(&constraints, today(), year(2024), month(6)));
        assert!(!month_disabled(&constraints, today(), year(2024), month(7)));
        assert!(month_disabled(&constraints, today(), year(2023), month(12)));
    }

    #[test]
    fn test_future_days() {
        let constraints = future();
        assert!(day_disabled(&constraints, today(), date(2024, 6, 10)));
        assert!(day_disabled(&constraints, today(), date(2024, 6, 14)));
        assert!(!day_disabled(&constraints, today(), date(2024, 6, 15)), "today is allowed");
        assert!(!day_disabled(&constraints, today(), date(2024, 6, 20)));
    }

    #[test]
    fn test_past_cases() {
        let constraints = past();
        assert!(!year_disabled(&constraints, today(), year(2024)));
        assert!(year_disabled(&constraints, today(), year(2025)));

        assert!(!month_disabled(&constraints, today(), year(2024), month(6)));
        assert!(month_disabled(&constraints, today(), year(2024), month(7)));

        assert!(!day_disabled(&constraints, today(), date(2024, 6, 15)), "today is allowed");
        assert!(day_disabled(&constraints, today(), date(2024, 6, 16)));
    }

    #[test]
    fn test_range_days_inclusive() {
        let constraints = march_range();
        assert!(day_disabled(&constraints, today(), date(2024, 3, 9)));
        assert!(!day_disabled(&constraints, today(), date(2024, 3, 10)));
        assert!(!day_disabled(&constraints, today(), date(2024, 3, 20)));
        assert!(day_disabled(&constraints, today(), date(2024, 3, 21)));
    }

    #[test]
    fn test_range_months_and_years() {
        let constraints = march_range();
        assert!(month_disabled(&constraints, today(), year(2024), month(2)));
        assert!(!month_disabled(&constraints, today(), year(2024), month(3)));
        assert!(month_disabled(&constraints, today(), year(2024), month(4)));

        assert!(year_disabled(&constraints, today(), year(2023)));
        assert!(!year_disabled(&constraints, today(), year(2024)));
        assert!(year_disabled(&constraints, today(), year(2025)));
    }

    #[test]
    fn test_day_of_month_disabled_agrees() {
        let constraints = march_range();
        assert!(day_of_month_disabled(&constraints, today(), year(2024), month(3), day(9, 2024, 3)));
        assert!(!day_of_month_disabled(&constraints, today(), year(2024), month(3), day(10, 2024, 3)));
    }

    #[test]
    fn test_conflicting_constraints_disable_everything() {
        let constraints = Constraints {
            date_future: true,
            range: DateRange::new(None, Some(date(2024, 1, 31))).expect("failed to construct open range"),
            ..Constraints::default()
        };
        for d in 1..=31 {
            assert!(day_disabled(&constraints, today(), date(2024, 1, d)));
        }
        for d in 1..=30 {
            assert!(day_disabled(&constraints, today(), date(2024, 6, d)));
        }
        assert!(month_disabled(&constraints, today(), year(2024), month(6)));
    }
}
