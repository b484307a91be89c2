pub mod types;
pub mod error;
pub mod config;
pub mod time;
pub mod holidays;
pub mod optimizer;
pub mod plan;

pub use types::*;
pub use error::{PlannerError, Result};
pub use optimizer::select_vacation_dates;
pub use plan::{Plan, PlanRequest, PlanSession};
