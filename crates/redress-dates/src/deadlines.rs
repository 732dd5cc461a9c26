//! Deadline computation for a resolved pathway instance.

use crate::calendar::{add_months, add_working_days, BankHolidayCalendar};
use crate::parse::extract_event_date;
use chrono::NaiveDate;
use redress_core::{DeadlineSet, ExtractedFacts, PathwayInstance, TimingRule};

/// Days remaining at or below which submission is flagged urgent
pub const URGENT_THRESHOLD_DAYS: i64 = 30;

/// Compute the deadline set for a session.
///
/// `None` when no event date can be extracted from the facts: the
/// presentation layer simply omits the deadline section. `today` is
/// injected for determinism.
pub fn compute_deadlines(
    facts: &ExtractedFacts,
    instance: &PathwayInstance,
    today: NaiveDate,
    calendar: &BankHolidayCalendar,
) -> Option<DeadlineSet> {
    let event_date = extract_event_date(facts)?;

    // Submission deadline from the pathway's overall time limit
    let submit_by = match TimingRule::from_text(&instance.time_limit) {
        Some(TimingRule::Months(n)) => Some(add_months(event_date, n)),
        _ => None,
    };

    let (days_remaining, submit_urgent, submit_expired) = match submit_by {
        Some(deadline) => {
            let days = (deadline - today).num_days();
            (days, days <= URGENT_THRESHOLD_DAYS, days < 0)
        }
        None => (0, false, false),
    };

    // Acknowledgment and response timelines run from today, at the
    // current step
    let step = instance.current_step();
    let acknowledgment_by = step
        .acknowledgment_rule
        .map(|rule| apply_rule(rule, today, calendar));
    let response_by = step
        .timeline_rule
        .map(|rule| apply_rule(rule, today, calendar));

    Some(DeadlineSet {
        submit_by,
        days_remaining,
        submit_urgent,
        submit_expired,
        acknowledgment_by,
        response_by,
    })
}

fn apply_rule(rule: TimingRule, from: NaiveDate, calendar: &BankHolidayCalendar) -> NaiveDate {
    match rule {
        TimingRule::WorkingDays(n) => add_working_days(from, n, calendar),
        TimingRule::Months(n) => add_months(from, n),
    }
}
