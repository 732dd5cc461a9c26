//! Redress Dates: fuzzy event dates, working days and deadlines.
//!
//! Turns approximate natural-language event dates into concrete dates and
//! computes calendar and business-day deadlines against a bank-holiday
//! calendar supplied as configuration.

pub mod calendar;
pub mod deadlines;
pub mod parse;

pub use calendar::{
    add_months, add_working_days, BankHolidayCalendar, CalendarError, DEFAULT_CALENDAR,
};
pub use deadlines::{compute_deadlines, URGENT_THRESHOLD_DAYS};
pub use parse::{extract_event_date, parse_date_text};
