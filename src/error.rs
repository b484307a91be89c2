/// Centralized error types for the vacation planner
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    // Holiday Data Errors
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    #[error("Invalid holiday record #{index}: {reason}")]
    InvalidHolidayRecord { index: usize, reason: String },

    #[error("No holiday data found: {0}")]
    HolidaysNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Errors caused by user-supplied values rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidParameter(_)
                | PlannerError::UnknownStrategy(_)
                | PlannerError::InvalidCountryCode(_)
                | PlannerError::InvalidDate(_)
        )
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            PlannerError::ConfigError(_) => "CFG_001",
            PlannerError::InvalidParameter(_) => "CFG_002",
            PlannerError::UnknownStrategy(_) => "PLAN_001",
            PlannerError::InvalidCountryCode(_) => "HOL_001",
            PlannerError::InvalidHolidayRecord { .. } => "HOL_002",
            PlannerError::HolidaysNotFound(_) => "HOL_003",
            PlannerError::InvalidDate(_) => "DATA_001",
            PlannerError::FileError(_) => "FILE_001",
            PlannerError::DeserializationError(_) => "DATA_002",
        }
    }
}
