//! Derived deadline set for one session.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Deadlines computed from the event date, the pathway's time limit and the
/// current step's timelines. Derived values only; never persisted
/// independently of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineSet {
    /// Last date the complaint can be submitted, when derivable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_by: Option<NaiveDate>,
    /// Whole days between today and `submit_by` (negative when past)
    pub days_remaining: i64,
    /// 30 days or fewer left
    pub submit_urgent: bool,
    /// Deadline already passed
    pub submit_expired: bool,
    /// When the body should acknowledge receipt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment_by: Option<NaiveDate>,
    /// When the body should respond in full
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_by: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_omits_absent_dates() {
        let set = DeadlineSet {
            submit_by: None,
            days_remaining: 0,
            submit_urgent: false,
            submit_expired: false,
            acknowledgment_by: None,
            response_by: None,
        };
        let json = serde_json::to_string(&set).unwrap();
        assert!(!json.contains("submit_by"));
        assert!(!json.contains("acknowledgment_by"));
    }
}
