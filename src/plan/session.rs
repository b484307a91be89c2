/// Planning session: the holidays of one country/year plus the latest plan
use chrono::NaiveDate;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::holidays::{normalize_country_code, FileHolidaySource, HolidayCalendar};
use crate::plan::classify::classify_year;
use crate::plan::request::{build_plan, Plan, PlanRequest};
use crate::types::{DayCell, Holiday};

pub struct PlanSession {
    country: String,
    year: i32,
    calendar: HolidayCalendar,
    plan: Option<Plan>,
}

impl PlanSession {
    pub fn new(country: impl Into<String>, year: i32, holidays: Vec<Holiday>) -> Self {
        PlanSession {
            country: country.into(),
            year,
            calendar: HolidayCalendar::new(holidays),
            plan: None,
        }
    }

    /// Start a session from the holiday source
    pub async fn load(source: &FileHolidaySource, country: &str, year: i32) -> Result<Self> {
        let code = normalize_country_code(country)?;
        let holidays = source.fetch(&code, year).await?;
        Ok(Self::new(code, year, holidays))
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Swap in holidays for another country/year; the previous plan is dropped
    pub fn replace_holidays(&mut self, country: impl Into<String>, year: i32, holidays: Vec<Holiday>) {
        self.country = country.into();
        self.year = year;
        self.calendar = HolidayCalendar::new(holidays);
        self.plan = None;
    }

    /// Recompute the plan from scratch, replacing any previous one
    pub fn calculate(&mut self, request: PlanRequest) -> Result<&Plan> {
        if !request.country.eq_ignore_ascii_case(&self.country) || request.year != self.year {
            return Err(PlannerError::InvalidParameter(format!(
                "session holds {} {} but request is for {} {}",
                self.country, self.year, request.country, request.year
            )));
        }

        let plan = build_plan(&self.calendar, &request)?;
        info!(
            "Plan {} for {} {}: {} days ({}), {} selected, longest streak {}",
            plan.id,
            request.country,
            request.year,
            request.requested_days,
            request.strategy,
            plan.selected.len(),
            plan.stats.longest_streak
        );

        Ok(&*self.plan.insert(plan))
    }

    /// Calendar cells for the session year using the current plan
    pub fn calendar_cells(&self, today: Option<NaiveDate>) -> Result<Vec<DayCell>> {
        let vacation = self.plan.as_ref().map(|p| p.selected.as_slice()).unwrap_or(&[]);
        classify_year(self.year, &self.calendar, vacation, today)
    }
}
