pub mod classify;
pub mod request;
pub mod session;

pub use classify::{classify_day, classify_year};
pub use request::{build_plan, Plan, PlanRequest};
pub use session::PlanSession;
