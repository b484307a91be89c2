/// Configuration loading from TOML file
use chrono_tz::Tz;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::holidays::normalize_country_code;
use crate::plan::request::{MAX_YEAR, MIN_YEAR};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PlannerError::ConfigError(format!("Failed to read config file: {}", e)))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| PlannerError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    normalize_country_code(&config.default_country)
        .map_err(|_| PlannerError::ConfigError(format!("Invalid default_country: {}", config.default_country)))?;

    if let Some(year) = config.default_year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PlannerError::ConfigError(format!("Invalid default_year: {}", year)));
        }
    }

    if !(0..=366).contains(&config.default_vacation_days) {
        return Err(PlannerError::ConfigError(format!(
            "Invalid default_vacation_days: {}",
            config.default_vacation_days
        )));
    }

    if config.holidays_dir.trim().is_empty() {
        return Err(PlannerError::ConfigError("holidays_dir is empty".to_string()));
    }

    if config.output_dir.trim().is_empty() {
        return Err(PlannerError::ConfigError("output_dir is empty".to_string()));
    }

    config.timezone()?;

    Ok(())
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| PlannerError::ConfigError(format!("Invalid timezone {}: {}", self.timezone, e)))
    }
}
