/// Holiday calendar lookups over a loaded holiday list
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::time::is_weekend;
use crate::types::Holiday;

/// Read-only view over the holidays of one country/year
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        let dates = holidays.iter().map(|h| h.date).collect();
        HolidayCalendar { holidays, dates }
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Display name of the first holiday falling on `date`
    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.display_name())
    }

    /// Check if a date is a working day (not weekend, not holiday)
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }
}
