/// Main entry point for the vacation planner
use chrono::Datelike;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vacation_planner::{
    config::load_config,
    error::{PlannerError, Result},
    holidays::FileHolidaySource,
    time::{to_iso, today_in},
    types::{Config, DayKind},
    PlanRequest, PlanSession, Strategy,
};

/// Read an environment override, falling back to the config default
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| PlannerError::InvalidParameter(format!("{}={}", key, value))),
        Err(_) => Ok(default),
    }
}

/// Build the request from config defaults and PLAN_* overrides
fn build_request(config: &Config) -> Result<PlanRequest> {
    let today = today_in(config.timezone()?);

    let country = std::env::var("PLAN_COUNTRY").unwrap_or_else(|_| config.default_country.clone());
    let year = env_or("PLAN_YEAR", config.default_year.unwrap_or(today.year()))?;
    let days = env_or("PLAN_DAYS", config.default_vacation_days)?;
    let strategy = match std::env::var("PLAN_STRATEGY") {
        Ok(value) => value.parse::<Strategy>()?,
        Err(_) => config.default_strategy,
    };

    PlanRequest::new(&country, year, days, strategy)
}

async fn run(config: &Config) -> Result<()> {
    let request = build_request(config)?;
    info!(
        "Planning {} vacation days for {} {} ({} strategy)",
        request.requested_days, request.country, request.year, request.strategy
    );

    let source = FileHolidaySource::new(&config.holidays_dir);
    let mut session = PlanSession::load(&source, &request.country, request.year).await?;
    if session.calendar().is_empty() {
        warn!("No holidays for {} {} - nothing to plan around", request.country, request.year);
    }

    let plan = session.calculate(request)?.clone();

    for date in plan.selected_sorted() {
        info!("   Vacation: {} ({})", to_iso(date), date.weekday());
    }
    info!("Total days off (excluding weekends): {}", plan.stats.total_days_off);
    info!("Longest streak: {} days", plan.stats.longest_streak);
    info!("Requested vacation days: {}", plan.stats.requested_days);

    let today = today_in(config.timezone()?);
    let cells = session.calendar_cells(Some(today))?;
    if let Some(cell) = cells.iter().find(|c| c.is_today) {
        info!("Today ({}) is {}", to_iso(cell.date), cell.kind.as_str());
    }
    let off = cells.iter().filter(|c| c.kind != DayKind::Plain).count();
    info!("{} of {} days in {} are off", off, cells.len(), session.year());

    tokio::fs::create_dir_all(&config.output_dir).await?;
    let output = Path::new(&config.output_dir).join(format!(
        "plan_{}_{}.json",
        session.country(),
        session.year()
    ));
    tokio::fs::write(&output, serde_json::to_string_pretty(&plan)?).await?;
    info!("Plan {} saved to {}", plan.id, output.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or_else(|_| "config.toml".to_string());

    let config = load_config(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Configuration loaded from {}", config_path);

    if let Err(e) = run(&config).await {
        if e.is_user_error() {
            warn!("Rejected plan request: {} ({})", e, e.error_code());
        } else {
            error!("Planning failed: {} ({})", e, e.error_code());
        }
        return Err(e);
    }

    Ok(())
}
