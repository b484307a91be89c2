/// Per-day classification for the calendar renderer
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::Result;
use crate::holidays::HolidayCalendar;
use crate::time::{dates_of_year, is_weekend};
use crate::types::{DayCell, DayKind};

/// Classify one date; vacation wins over holiday, holiday over weekend
pub fn classify_day(
    date: NaiveDate,
    calendar: &HolidayCalendar,
    vacation: &HashSet<NaiveDate>,
    today: Option<NaiveDate>,
) -> DayCell {
    let holiday_name = calendar.name_for(date).map(str::to_string);

    let kind = if vacation.contains(&date) {
        DayKind::Vacation
    } else if holiday_name.is_some() {
        DayKind::Holiday
    } else if is_weekend(date) {
        DayKind::Weekend
    } else {
        DayKind::Plain
    };

    DayCell {
        date,
        kind,
        is_today: today == Some(date),
        holiday_name,
    }
}

/// One cell per date of `year`, in calendar order
pub fn classify_year(
    year: i32,
    calendar: &HolidayCalendar,
    vacation: &[NaiveDate],
    today: Option<NaiveDate>,
) -> Result<Vec<DayCell>> {
    let vacation: HashSet<NaiveDate> = vacation.iter().copied().collect();

    Ok(dates_of_year(year)?
        .into_iter()
        .map(|date| classify_day(date, calendar, &vacation, today))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holiday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priorities() {
        let calendar = HolidayCalendar::new(vec![
            Holiday::new(date(2025, 5, 1), "Labour Day").with_local_name("Svátek práce"),
            Holiday::new(date(2025, 5, 10), "Saturday Holiday"),
        ]);
        let vacation: HashSet<NaiveDate> = [date(2025, 5, 2), date(2025, 5, 3)].into_iter().collect();

        let holiday = classify_day(date(2025, 5, 1), &calendar, &vacation, None);
        assert_eq!(holiday.kind, DayKind::Holiday);
        assert_eq!(holiday.holiday_name.as_deref(), Some("Svátek práce"));

        assert_eq!(classify_day(date(2025, 5, 2), &calendar, &vacation, None).kind, DayKind::Vacation);
        // vacation beats weekend
        assert_eq!(classify_day(date(2025, 5, 3), &calendar, &vacation, None).kind, DayKind::Vacation);
        assert_eq!(classify_day(date(2025, 5, 4), &calendar, &vacation, None).kind, DayKind::Weekend);
        // holiday beats weekend
        assert_eq!(classify_day(date(2025, 5, 10), &calendar, &vacation, None).kind, DayKind::Holiday);
        assert_eq!(classify_day(date(2025, 5, 5), &calendar, &vacation, None).kind, DayKind::Plain);
    }

    #[test]
    fn test_today_flag() {
        let calendar = HolidayCalendar::default();
        let cells = classify_year(2025, &calendar, &[], Some(date(2025, 3, 14))).unwrap();

        assert_eq!(cells.len(), 365);
        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 3, 14));
        assert_eq!(today[0].kind, DayKind::Plain);
    }

    #[test]
    fn test_year_counts() {
        let calendar = HolidayCalendar::new(vec![Holiday::new(date(2025, 1, 1), "New Year")]);
        let cells = classify_year(2025, &calendar, &[date(2025, 1, 2), date(2024, 12, 31)], None).unwrap();

        let count = |kind: DayKind| cells.iter().filter(|c| c.kind == kind).count();
        assert_eq!(count(DayKind::Holiday), 1);
        assert_eq!(count(DayKind::Vacation), 1);
        assert_eq!(count(DayKind::Weekend), 104);
        assert_eq!(cells.iter().filter(|c| c.kind.is_off()).count(), 106);
    }
}
