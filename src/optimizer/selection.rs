/// Greedy vacation date selection over ranked periods
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::holidays::HolidayCalendar;
use crate::optimizer::period::Period;
use crate::time::add_days;
use crate::types::Strategy;

/// Furthest distance from the holiday the walk will look
pub const MAX_WALK_OFFSET: i64 = 10;

/// Dates drawn from one period during selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDraw {
    pub holiday: NaiveDate,
    pub days_to_use: i64,
    pub added: i64,
}

/// Outcome of a greedy selection pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Selected dates in discovery order
    pub dates: Vec<NaiveDate>,
    pub draws: Vec<PeriodDraw>,
}

/// Walk the ranked periods best-first, spending the day budget around each holiday
///
/// Candidates alternate `holiday - k`, `holiday + k` for `k = 1..=10`. A date
/// already taken by an earlier period is skipped, not re-counted, so the walk
/// may add fewer than `days_to_use` dates.
pub fn select_from_periods(
    ranked: &[Period],
    calendar: &HolidayCalendar,
    requested_days: i64,
    strategy: Strategy,
) -> Selection {
    let mut selection = Selection::default();
    let mut taken: HashSet<NaiveDate> = HashSet::new();
    let mut remaining_days = requested_days;

    for period in ranked {
        if remaining_days <= 0 {
            break;
        }

        let mut days_to_use = (period.working_days as i64).min(remaining_days);
        if let Some(cap) = strategy.day_cap() {
            days_to_use = days_to_use.min(cap);
        }

        let mut added = 0;
        let mut offset = 1;
        while added < days_to_use && offset <= MAX_WALK_OFFSET {
            for candidate in [add_days(period.holiday, -offset), add_days(period.holiday, offset)] {
                if added >= days_to_use {
                    break;
                }
                if calendar.is_working_day(candidate) && taken.insert(candidate) {
                    selection.dates.push(candidate);
                    added += 1;
                }
            }
            offset += 1;
        }

        debug!(
            "Period around {}: used {}/{} days ({} remaining)",
            period.holiday,
            added,
            days_to_use,
            remaining_days - added
        );

        selection.draws.push(PeriodDraw {
            holiday: period.holiday,
            days_to_use,
            added,
        });
        remaining_days -= added;
    }

    selection
}
