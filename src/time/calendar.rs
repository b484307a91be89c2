/// Calendar date utilities: weekend rule and immutable date arithmetic
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{PlannerError, Result};

/// Saturday and Sunday are weekend days regardless of display week start
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Date `days` away from `date` (negative moves backwards)
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// ISO 8601 calendar date (yyyy-mm-dd)
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| PlannerError::InvalidDate(format!("{}: {}", value, e)))
}

/// First and last day of a year
fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| PlannerError::InvalidDate(format!("year {} out of range", year)))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| PlannerError::InvalidDate(format!("year {} out of range", year)))?;
    Ok((start, end))
}

/// Every date from `start` to `end` inclusive, one day at a time
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = add_days(current, 1);
    }
    dates
}

/// Every date of a calendar year in order
pub fn dates_of_year(year: i32) -> Result<Vec<NaiveDate>> {
    let (start, end) = year_bounds(year)?;
    Ok(dates_between(start, end))
}

/// Today's date as seen in the given timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(date(2025, 1, 4))); // Saturday
        assert!(is_weekend(date(2025, 1, 5))); // Sunday
        assert!(!is_weekend(date(2025, 1, 6))); // Monday
        assert!(!is_weekend(date(2025, 1, 3))); // Friday
    }

    #[test]
    fn test_add_days_crosses_year() {
        assert_eq!(add_days(date(2025, 1, 1), -7), date(2024, 12, 25));
        assert_eq!(add_days(date(2024, 12, 31), 1), date(2025, 1, 1));
        assert_eq!(add_days(date(2024, 2, 28), 1), date(2024, 2, 29));
    }

    #[test]
    fn test_iso_round_trip() {
        assert_eq!(to_iso(date(2025, 3, 9)), "2025-03-09");
        assert_eq!(parse_iso("2025-03-09").unwrap(), date(2025, 3, 9));
        assert!(matches!(parse_iso("2025-13-01"), Err(PlannerError::InvalidDate(_))));
    }

    #[test]
    fn test_dates_of_year() {
        assert_eq!(dates_of_year(2025).unwrap().len(), 365);
        assert_eq!(dates_of_year(2024).unwrap().len(), 366);
        let dates = dates_of_year(2025).unwrap();
        assert_eq!(dates.first(), Some(&date(2025, 1, 1)));
        assert_eq!(dates.last(), Some(&date(2025, 12, 31)));
    }

    #[test]
    fn test_dates_between_inclusive() {
        let dates = dates_between(date(2024, 12, 25), date(2025, 1, 8));
        assert_eq!(dates.len(), 15);
        assert!(dates_between(date(2025, 1, 2), date(2025, 1, 1)).is_empty());
    }
}
