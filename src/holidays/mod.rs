pub mod calendar;
pub mod source;

pub use calendar::HolidayCalendar;
pub use source::{normalize_country_code, parse_holidays, FileHolidaySource};
