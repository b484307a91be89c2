/// Days-off statistics: streaks and totals over a plan year
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::Result;
use crate::holidays::HolidayCalendar;
use crate::time::{add_days, dates_of_year, is_weekend};
use crate::types::PlanStats;

/// Chronological list of every day off in `year`
///
/// A day is off when it is a weekend, a holiday or a selected vacation day.
/// Vacation dates outside the year are ignored.
pub fn off_dates(year: i32, calendar: &HolidayCalendar, vacation: &[NaiveDate]) -> Result<Vec<NaiveDate>> {
    let vacation: HashSet<NaiveDate> = vacation.iter().copied().collect();

    Ok(dates_of_year(year)?
        .into_iter()
        .filter(|d| is_weekend(*d) || calendar.is_holiday(*d) || vacation.contains(d))
        .collect())
}

/// Longest run of dates exactly one day apart
pub fn longest_streak(dates: &[NaiveDate]) -> usize {
    let mut sorted = dates.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in sorted {
        current = match previous {
            Some(prev) if add_days(prev, 1) == date => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

/// Summary handed to the stats display
pub fn compute_stats(
    year: i32,
    calendar: &HolidayCalendar,
    vacation: &[NaiveDate],
    requested_days: i64,
) -> Result<PlanStats> {
    let off = off_dates(year, calendar, vacation)?;

    Ok(PlanStats {
        requested_days,
        total_days_off: off.iter().filter(|d| !is_weekend(**d)).count(),
        longest_streak: longest_streak(&off),
    })
}
