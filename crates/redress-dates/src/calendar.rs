//! Bank-holiday calendar and date arithmetic.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Compiled-in default calendar (config/bank-holidays.yaml)
const DEFAULT_CALENDAR_YAML: &str = include_str!("../../../config/bank-holidays.yaml");

pub static DEFAULT_CALENDAR: Lazy<BankHolidayCalendar> = Lazy::new(|| {
    BankHolidayCalendar::from_yaml(DEFAULT_CALENDAR_YAML).expect("built-in holiday calendar parses")
});

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("CALENDAR/read: {0}")]
    Read(#[from] std::io::Error),
    #[error("CALENDAR/parse: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A dated list of public holidays.
///
/// Must stay in step with the published UK bank-holiday list for the
/// configured years; supplied as data so it updates without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankHolidayCalendar {
    pub version: String,
    pub region: String,
    pub holidays: BTreeSet<NaiveDate>,
}

impl BankHolidayCalendar {
    pub fn from_yaml(yaml: &str) -> Result<Self, CalendarError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &str) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// A calendar with an explicit holiday set (tests, custom regions)
    pub fn with_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            version: "custom".to_string(),
            region: "custom".to_string(),
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Not a weekend and not a listed holiday
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }
}

/// Add `n` working days by walking forward one calendar day at a time,
/// counting only working days. Correct by construction against the
/// calendar; no closed-form shortcut.
pub fn add_working_days(start: NaiveDate, n: u32, calendar: &BankHolidayCalendar) -> NaiveDate {
    let mut date = start;
    let mut counted = 0;
    while counted < n {
        date = date.succ_opt().expect("date overflow");
        if calendar.is_working_day(date) {
            counted += 1;
        }
    }
    date
}

/// Calendar-month addition with end-of-month clamping: one month past
/// 31 January is the last day of February, not an overflow into March.
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_months(Months::new(n))
        .expect("date overflow")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_default_calendar_parses() {
        let cal = &*DEFAULT_CALENDAR;
        assert!(cal.is_holiday(d(2025, 4, 18)));
        assert!(cal.is_holiday(d(2025, 4, 21)));
        assert!(cal.is_holiday(d(2026, 12, 28)));
        assert!(!cal.is_holiday(d(2025, 4, 22)));
    }

    #[test]
    fn test_weekends_are_not_working_days() {
        let cal = BankHolidayCalendar::with_holidays([]);
        assert!(!cal.is_working_day(d(2025, 4, 19))); // Saturday
        assert!(!cal.is_working_day(d(2025, 4, 20))); // Sunday
        assert!(cal.is_working_day(d(2025, 4, 22))); // Tuesday
    }

    #[test]
    fn test_add_working_days_skips_easter() {
        // Thu 17 Apr + 1 working day skips Good Friday, the weekend and
        // Easter Monday, landing on Tue 22 Apr
        let cal = BankHolidayCalendar::with_holidays([d(2025, 4, 18), d(2025, 4, 21)]);
        assert_eq!(add_working_days(d(2025, 4, 17), 1, &cal), d(2025, 4, 22));
    }

    #[test]
    fn test_add_working_days_plain_week() {
        let cal = BankHolidayCalendar::with_holidays([]);
        // Mon 7 Apr 2025 + 5 working days = Mon 14 Apr
        assert_eq!(add_working_days(d(2025, 4, 7), 5, &cal), d(2025, 4, 14));
    }

    #[test]
    fn test_add_working_days_zero() {
        let cal = BankHolidayCalendar::with_holidays([]);
        assert_eq!(add_working_days(d(2025, 4, 19), 0, &cal), d(2025, 4, 19));
    }

    #[test]
    fn test_add_working_days_matches_default_calendar() {
        // 20 working days from Tue 1 Apr 2025: Good Friday and Easter
        // Monday fall inside the window, pushing the result to 1 May
        assert_eq!(
            add_working_days(d(2025, 4, 1), 20, &DEFAULT_CALENDAR),
            d(2025, 5, 1)
        );
    }

    #[test]
    fn test_add_months_clamps_end_of_month() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29)); // leap year
        assert_eq!(add_months(d(2025, 8, 31), 1), d(2025, 9, 30));
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(d(2025, 3, 15), 12), d(2026, 3, 15));
        assert_eq!(add_months(d(2025, 3, 15), 1), d(2025, 4, 15));
    }
}
