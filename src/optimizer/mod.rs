/// Vacation date optimizer
///
/// Pipeline: one [`Period`] per holiday, ranked by [`Strategy`], then a greedy
/// walk around each holiday spends the vacation budget. Pure and synchronous.
pub mod period;
pub mod ranking;
pub mod selection;
pub mod stats;

use chrono::NaiveDate;
use tracing::debug;

use crate::holidays::HolidayCalendar;
use crate::types::{Holiday, Strategy};

pub use period::{discover_periods, Period, PERIOD_RADIUS_DAYS};
pub use ranking::{rank, score};
pub use selection::{select_from_periods, PeriodDraw, Selection, MAX_WALK_OFFSET};
pub use stats::{compute_stats, longest_streak, off_dates};

/// Run the full pipeline against a holiday calendar
pub fn optimize(calendar: &HolidayCalendar, requested_days: i64, strategy: Strategy) -> Selection {
    let periods = discover_periods(calendar);
    debug!("Discovered {} periods", periods.len());

    let ranked = rank(periods, strategy);
    let selection = select_from_periods(&ranked, calendar, requested_days, strategy);

    debug!(
        "Selected {} of {} requested days ({} strategy)",
        selection.dates.len(),
        requested_days,
        strategy
    );
    selection
}

/// Pick vacation dates around `holidays`; no selected date is a weekend, a holiday or a repeat
pub fn select_vacation_dates(
    holidays: &[Holiday],
    requested_days: i64,
    strategy: Strategy,
) -> Vec<NaiveDate> {
    let calendar = HolidayCalendar::new(holidays.to_vec());
    optimize(&calendar, requested_days, strategy).dates
}
