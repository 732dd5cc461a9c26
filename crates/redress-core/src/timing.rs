//! Canonical timing rules derived from human-readable timeline text.
//!
//! Catalog text stays human ("They should respond within 20 working days");
//! the deadline calculator works from the derived rule, not the prose.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WORKING_DAYS_RE: Regex =
        Regex::new(r"(?i)(\d+)\s+working\s+days?").expect("working-days regex");
    static ref MONTHS_RE: Regex = Regex::new(r"(?i)(\d+)\s+months?").expect("months regex");
}

/// A canonical duration parsed out of timeline text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum TimingRule {
    /// Business days, skipping weekends and bank holidays
    WorkingDays(u32),
    /// Calendar months with end-of-month clamping
    Months(u32),
}

impl TimingRule {
    /// Derive a canonical rule from timeline text, if it carries one.
    ///
    /// Working days are checked first: "20 working days" must not be read
    /// as a month count, and month phrasing never mentions days.
    pub fn from_text(text: &str) -> Option<TimingRule> {
        if let Some(caps) = WORKING_DAYS_RE.captures(text) {
            let n: u32 = caps[1].parse().ok()?;
            return Some(TimingRule::WorkingDays(n));
        }
        if let Some(caps) = MONTHS_RE.captures(text) {
            let n: u32 = caps[1].parse().ok()?;
            return Some(TimingRule::Months(n));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_days() {
        assert_eq!(
            TimingRule::from_text("They must acknowledge within 3 working days"),
            Some(TimingRule::WorkingDays(3))
        );
        assert_eq!(
            TimingRule::from_text("A full response within 20 working days."),
            Some(TimingRule::WorkingDays(20))
        );
    }

    #[test]
    fn test_months() {
        assert_eq!(
            TimingRule::from_text("You have 12 months from the event"),
            Some(TimingRule::Months(12))
        );
        assert_eq!(
            TimingRule::from_text("Usually within 1 month"),
            Some(TimingRule::Months(1))
        );
    }

    #[test]
    fn test_working_days_wins_over_months() {
        // Text mentioning both should canonicalize to the working-day rule
        assert_eq!(
            TimingRule::from_text("20 working days, or up to 6 months for complex cases"),
            Some(TimingRule::WorkingDays(20))
        );
    }

    #[test]
    fn test_no_rule() {
        assert_eq!(TimingRule::from_text("as soon as possible"), None);
        assert_eq!(TimingRule::from_text(""), None);
    }
}
