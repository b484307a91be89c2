pub mod calendar;

pub use calendar::{
    add_days, dates_between, dates_of_year, is_weekend, parse_iso, to_iso, today_in,
};
