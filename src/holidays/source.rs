/// Holiday data source: record validation and file-backed loading
///
/// Records follow the nager.at `PublicHolidays` JSON layout:
/// `[{"date": "2025-01-01", "localName": "...", "name": "...", "countryCode": "CZ", ...}]`.
/// Unknown fields are ignored.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use chrono::Datelike;

use crate::error::{PlannerError, Result};
use crate::plan::request::{MAX_YEAR, MIN_YEAR};
use crate::time::parse_iso;
use crate::types::Holiday;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayRecord {
    date: Option<String>,
    name: Option<String>,
    local_name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl HolidayRecord {
    fn into_holiday(self, index: usize) -> Result<Holiday> {
        let raw_date = non_empty(self.date).ok_or_else(|| PlannerError::InvalidHolidayRecord {
            index,
            reason: "missing date".to_string(),
        })?;

        let date = parse_iso(&raw_date).map_err(|e| PlannerError::InvalidHolidayRecord {
            index,
            reason: e.to_string(),
        })?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(PlannerError::InvalidHolidayRecord {
                index,
                reason: format!("date {} outside years {}..={}", raw_date, MIN_YEAR, MAX_YEAR),
            });
        }

        let local_name = non_empty(self.local_name);
        let name = non_empty(self.name)
            .or_else(|| local_name.clone())
            .ok_or_else(|| PlannerError::InvalidHolidayRecord {
                index,
                reason: format!("holiday on {} has no name", raw_date),
            })?;

        Ok(Holiday {
            date,
            name,
            local_name,
        })
    }
}

/// Parse and validate a JSON array of holiday records
///
/// The first malformed record fails the whole batch.
pub fn parse_holidays(json: &str) -> Result<Vec<Holiday>> {
    let records: Vec<HolidayRecord> = serde_json::from_str(json)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_holiday(index))
        .collect()
}

/// Two ASCII letters, returned upper-cased
pub fn normalize_country_code(country: &str) -> Result<String> {
    let code = country.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PlannerError::InvalidCountryCode(country.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}

/// Loads holidays from `<dir>/<CC>_<year>.json`
pub struct FileHolidaySource {
    dir: PathBuf,
}

impl FileHolidaySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        FileHolidaySource {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, country: &str, year: i32) -> Result<PathBuf> {
        let code = normalize_country_code(country)?;
        Ok(self.dir.join(format!("{}_{}.json", code, year)))
    }

    /// Fetch the public holidays for a country and year
    pub async fn fetch(&self, country: &str, year: i32) -> Result<Vec<Holiday>> {
        let path = self.path_for(country, year)?;
        debug!("Loading holidays from {}", path.display());

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No holiday file at {}", path.display());
                return Err(PlannerError::HolidaysNotFound(format!(
                    "{} {} ({})",
                    country,
                    year,
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let holidays = parse_holidays(&content)?;
        let foreign = holidays.iter().filter(|h| h.date.year() != year).count();
        if foreign > 0 {
            warn!("{} holidays in {} fall outside {}", foreign, path.display(), year);
        }
        info!("Loaded {} holidays for {} {}", holidays.len(), country, year);

        Ok(holidays)
    }
}
