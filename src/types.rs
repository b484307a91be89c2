/// Core type definitions for the vacation planner
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// Public holiday as supplied by the holiday source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub local_name: Option<String>,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: name.into(),
            local_name: None,
        }
    }

    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    /// Localized name when present, generic name otherwise
    pub fn display_name(&self) -> &str {
        match self.local_name.as_deref() {
            Some(local) if !local.trim().is_empty() => local,
            _ => &self.name,
        }
    }
}

/// Selection heuristic for ranking holiday periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Balanced,
    Long,
    Short,
}

impl Strategy {
    pub fn as_str(&self) -> &str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Long => "long",
            Strategy::Short => "short",
        }
    }

    /// Maximum number of vacation days drawn from a single period
    pub fn day_cap(&self) -> Option<i64> {
        match self {
            Strategy::Short => Some(5),
            Strategy::Balanced | Strategy::Long => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(Strategy::Balanced),
            "long" => Ok(Strategy::Long),
            "short" => Ok(Strategy::Short),
            other => Err(PlannerError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Display classification of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    Vacation,
    Holiday,
    Weekend,
    Plain,
}

impl DayKind {
    pub fn as_str(&self) -> &str {
        match self {
            DayKind::Vacation => "VACATION",
            DayKind::Holiday => "HOLIDAY",
            DayKind::Weekend => "WEEKEND",
            DayKind::Plain => "PLAIN",
        }
    }

    /// Every kind except `Plain` is a day off
    pub fn is_off(&self) -> bool {
        !matches!(self, DayKind::Plain)
    }
}

/// One calendar day handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub is_today: bool,
    pub holiday_name: Option<String>,
}

/// Summary numbers handed to the stats display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub requested_days: i64,
    pub total_days_off: usize,
    pub longest_streak: usize,
}

/// Configuration for the vacation planner
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Plan Defaults
    pub default_country: String,
    pub default_year: Option<i32>,
    pub default_vacation_days: i64,
    #[serde(default)]
    pub default_strategy: Strategy,

    // Data Locations
    pub holidays_dir: String,
    pub output_dir: String,

    // Calendar
    pub timezone: String,

    // Logging
    pub log_level: String,
}
