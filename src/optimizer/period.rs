/// Period discovery: one scoring window per holiday
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayCalendar;
use crate::time::add_days;

/// Days on each side of the anchor holiday
pub const PERIOD_RADIUS_DAYS: i64 = 7;

/// Window of `[holiday - 7, holiday + 7]` scored by how few working days it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub holiday: NaiveDate,
    pub working_days: usize,
    pub total_days: usize,
    pub efficiency: f64,
}

impl Period {
    /// Score the window around a single holiday, walking it day by day
    pub fn around(holiday: NaiveDate, calendar: &HolidayCalendar) -> Self {
        let start = add_days(holiday, -PERIOD_RADIUS_DAYS);
        let end = add_days(holiday, PERIOD_RADIUS_DAYS);

        let mut working_days = 0;
        let mut total_days = 0;
        let mut current = start;
        while current <= end {
            if calendar.is_working_day(current) {
                working_days += 1;
            }
            total_days += 1;
            current = add_days(current, 1);
        }

        Period {
            start,
            end,
            holiday,
            working_days,
            total_days,
            efficiency: total_days as f64 / working_days.max(1) as f64,
        }
    }
}

/// One period per holiday, in holiday-list order
///
/// Overlapping windows are not merged, and a duplicated holiday date yields
/// a duplicated period.
pub fn discover_periods(calendar: &HolidayCalendar) -> Vec<Period> {
    calendar
        .holidays()
        .iter()
        .map(|h| Period::around(h.date, calendar))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holiday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_year_period() {
        let calendar = HolidayCalendar::new(vec![Holiday::new(date(2025, 1, 1), "New Year")]);
        let periods = discover_periods(&calendar);

        assert_eq!(periods.len(), 1);
        let period = &periods[0];
        assert_eq!(period.start, date(2024, 12, 25));
        assert_eq!(period.end, date(2025, 1, 8));
        assert_eq!(period.total_days, 15);
        // 15 days minus two weekends minus the holiday itself
        assert_eq!(period.working_days, 10);
        assert!((period.efficiency - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_neighbouring_holidays_reduce_working_days() {
        let calendar = HolidayCalendar::new(vec![
            Holiday::new(date(2025, 12, 24), "Christmas Eve"),
            Holiday::new(date(2025, 12, 25), "Christmas Day"),
            Holiday::new(date(2025, 12, 26), "St. Stephen's Day"),
        ]);
        let periods = discover_periods(&calendar);

        assert_eq!(periods.len(), 3);
        // Windows overlap but each holiday keeps its own period
        assert_eq!(periods[1].start, date(2025, 12, 18));
        assert_eq!(periods[1].working_days, 8);
        assert!((periods[1].efficiency - 15.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_working_days_floors_denominator() {
        // Every weekday in the window is a holiday
        let holidays: Vec<Holiday> = crate::time::dates_between(date(2025, 3, 3), date(2025, 3, 21))
            .into_iter()
            .filter(|d| !crate::time::is_weekend(*d))
            .map(|d| Holiday::new(d, "Festival"))
            .collect();
        let calendar = HolidayCalendar::new(holidays);

        let period = Period::around(date(2025, 3, 12), &calendar);
        assert_eq!(period.working_days, 0);
        assert!((period.efficiency - period.total_days as f64).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_holidays_duplicate_periods() {
        let calendar = HolidayCalendar::new(vec![
            Holiday::new(date(2025, 5, 1), "Labour Day"),
            Holiday::new(date(2025, 5, 1), "Labour Day"),
        ]);
        let periods = discover_periods(&calendar);
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0], periods[1]);
    }

    #[test]
    fn test_empty_calendar_no_periods() {
        assert!(discover_periods(&HolidayCalendar::default()).is_empty());
    }
}
