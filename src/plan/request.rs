/// Plan requests and computed plans
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, Result};
use crate::holidays::{normalize_country_code, HolidayCalendar};
use crate::optimizer::{compute_stats, optimize, PeriodDraw};
use crate::types::{PlanStats, Strategy};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2999;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub country: String,
    pub year: i32,
    pub requested_days: i64,
    pub strategy: Strategy,
}

impl PlanRequest {
    pub fn new(country: &str, year: i32, requested_days: i64, strategy: Strategy) -> Result<Self> {
        let country = normalize_country_code(country)?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PlannerError::InvalidParameter(format!(
                "year {} outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }

        Ok(PlanRequest {
            country,
            year,
            requested_days,
            strategy,
        })
    }
}

/// Result of one optimization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub request: PlanRequest,
    /// Vacation dates in discovery order
    pub selected: Vec<NaiveDate>,
    pub draws: Vec<PeriodDraw>,
    pub stats: PlanStats,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    /// Selected dates in calendar order
    pub fn selected_sorted(&self) -> Vec<NaiveDate> {
        let mut dates = self.selected.clone();
        dates.sort();
        dates
    }
}

/// Optimize a request against an already loaded calendar
pub fn build_plan(calendar: &HolidayCalendar, request: &PlanRequest) -> Result<Plan> {
    let selection = optimize(calendar, request.requested_days, request.strategy);
    let stats = compute_stats(
        request.year,
        calendar,
        &selection.dates,
        request.requested_days,
    )?;

    Ok(Plan {
        id: Uuid::new_v4(),
        request: request.clone(),
        selected: selection.dates,
        draws: selection.draws,
        stats,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Holiday;

    #[test]
    fn test_request_validation() {
        let request = PlanRequest::new("cz", 2025, 5, Strategy::Long).unwrap();
        assert_eq!(request.country, "CZ");

        assert!(matches!(
            PlanRequest::new("CZE", 2025, 5, Strategy::Long),
            Err(PlannerError::InvalidCountryCode(_))
        ));
        assert!(matches!(
            PlanRequest::new("CZ", 12025, 5, Strategy::Long),
            Err(PlannerError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_days_accepted_as_empty_plan() {
        let calendar = HolidayCalendar::new(vec![Holiday::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "New Year",
        )]);
        let request = PlanRequest::new("CZ", 2025, -2, Strategy::Balanced).unwrap();
        let plan = build_plan(&calendar, &request).unwrap();

        assert!(plan.selected.is_empty());
        assert_eq!(plan.stats.requested_days, -2);
        assert_eq!(plan.stats.total_days_off, 1);
    }

    #[test]
    fn test_plan_serializes_iso_dates() {
        let calendar = HolidayCalendar::new(vec![Holiday::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "New Year",
        )]);
        let request = PlanRequest::new("CZ", 2025, 2, Strategy::Balanced).unwrap();
        let plan = build_plan(&calendar, &request).unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"2024-12-31\""));
        assert!(json.contains("\"balanced\""));

        let restored: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.selected, plan.selected);
        assert_eq!(
            restored.selected_sorted(),
            vec![
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
            ]
        );
    }

    #[test]
    fn test_czech_christmas_bridge() {
        let holidays =
            crate::holidays::parse_holidays(include_str!("../../data/holidays/CZ_2025.json")).unwrap();
        let calendar = HolidayCalendar::new(holidays);
        let request = PlanRequest::new("CZ", 2025, 5, Strategy::Balanced).unwrap();
        let plan = build_plan(&calendar, &request).unwrap();

        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        // Christmas Eve has the fewest working days around it
        assert_eq!(plan.draws[0].holiday, date(12, 24));
        assert_eq!(
            plan.selected,
            vec![date(12, 23), date(12, 22), date(12, 19), date(12, 29), date(12, 18)]
        );
        // Thu 18 Dec .. Mon 29 Dec
        assert_eq!(plan.stats.longest_streak, 12);
        assert_eq!(plan.stats.total_days_off, 15);
    }
}
