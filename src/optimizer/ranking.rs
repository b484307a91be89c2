/// Strategy-based period ranking
use crate::optimizer::period::Period;
use crate::types::Strategy;

/// Ranking key of a period under a strategy (higher is better)
pub fn score(period: &Period, strategy: Strategy) -> f64 {
    let working_days = period.working_days as f64;
    match strategy {
        Strategy::Balanced => period.efficiency,
        Strategy::Long => working_days * 2.0 + period.efficiency,
        Strategy::Short => period.efficiency * 3.0 - working_days * 0.5,
    }
}

/// Order periods best-first; equal scores keep their input order
pub fn rank(mut periods: Vec<Period>, strategy: Strategy) -> Vec<Period> {
    periods.sort_by(|a, b| score(b, strategy).total_cmp(&score(a, strategy)));
    periods
}
