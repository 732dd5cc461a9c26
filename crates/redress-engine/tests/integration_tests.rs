//! End-to-end workflow tests across the whole engine stack.

use chrono::NaiveDate;
use redress_core::{
    BodyType, ComplaintType, ExtractedFacts, Nation, RedressError, SafeguardingConcern,
};
use redress_engine::{SessionWorkflow, WorkflowStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn test_full_flow_council_complaint() {
    let mut session = SessionWorkflow::with_today(today());

    let facts = ExtractedFacts::new(BodyType::Council)
        .with_nation(Nation::England)
        .with_date("15/03/2025")
        .with_steps_taken("I phoned the council twice and nothing happened")
        .with_summary("Missed bin collections for six weeks");
    session.submit_facts(facts).unwrap();

    let instance = session.confirm_summary().unwrap();
    // Informal contact already made, so the formal stage is current
    assert_eq!(instance.current_index(), 1);
    assert_eq!(instance.key, "council");

    let deadlines = session.deadlines().unwrap();
    let submit_by = deadlines.submit_by.unwrap();
    assert!(submit_by > today());

    let composed = session.request_letter().unwrap();
    assert_eq!(session.status(), WorkflowStatus::Letter);
    assert_eq!(composed.data.step_name, "Stage 1 formal complaint");
    assert!(composed.prompt.contains("Stage 1 formal complaint"));
    assert!(composed
        .prompt
        .contains("Missed bin collections for six weeks"));
}

#[test]
fn test_devolved_route_spso_for_scottish_council() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::Council)
                .with_nation(Nation::Scotland)
                .with_steps_taken("I have already been through the full complaints procedure"),
        )
        .unwrap();

    let instance = session.confirm_summary().unwrap();
    assert_eq!(instance.key, "council_scotland");
    let last = instance.steps.last().unwrap();
    assert!(last
        .template
        .name
        .contains("Scottish Public Services Ombudsman"));
}

#[test]
fn test_dwp_decision_routes_to_mandatory_reconsideration() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::Dwp)
                .with_complaint_type(ComplaintType::Decision)
                .with_date("2025-05-20"),
        )
        .unwrap();

    let instance = session.confirm_summary().unwrap();
    assert_eq!(instance.key, "dwp_decision");
    assert!(instance.steps[0]
        .template
        .name
        .contains("mandatory reconsideration"));

    // One-month challenge window from the decision date
    let deadlines = session.deadlines().unwrap();
    assert_eq!(
        deadlines.submit_by,
        Some(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())
    );
    assert!(deadlines.submit_urgent);
    assert!(!deadlines.submit_expired);
}

#[test]
fn test_crime_concern_blocks_unconditionally() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::Police).with_concern(SafeguardingConcern::Crime),
        )
        .unwrap();

    // Acknowledging must not weaken a serious block
    session.acknowledge_notice();
    let err = session.confirm_summary().unwrap_err();
    assert!(matches!(
        err,
        RedressError::SafeguardingBlock { ref category } if category == "crime"
    ));
    assert_eq!(session.status(), WorkflowStatus::Signposted);
    assert!(session.signposting().unwrap().is_blocked());
    assert!(session.pathway().is_none());

    // Signposted is terminal; no call sequence reaches the pathway
    assert!(session.confirm_summary().is_err());
    assert!(session.request_letter().is_err());
    assert!(session
        .submit_facts(ExtractedFacts::new(BodyType::Police))
        .is_err());

    // Only a reset starts over
    session.reset();
    assert_eq!(session.status(), WorkflowStatus::Intake);
    assert!(session.signposting().is_none());
}

#[test]
fn test_regulatory_concern_gates_on_acknowledgment() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::NhsTrust).with_concern(SafeguardingConcern::Regulatory),
        )
        .unwrap();

    // Held until the notice is acknowledged
    assert!(matches!(
        session.confirm_summary(),
        Err(RedressError::AcknowledgmentRequired)
    ));
    assert_eq!(session.status(), WorkflowStatus::Summary);

    session.acknowledge_notice();
    session.confirm_summary().unwrap();
    assert_eq!(session.status(), WorkflowStatus::Pathway);
}

#[test]
fn test_acknowledgment_does_not_survive_reset() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::NhsTrust).with_concern(SafeguardingConcern::Regulatory),
        )
        .unwrap();
    session.acknowledge_notice();
    session.confirm_summary().unwrap();

    session.reset();
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::NhsTrust).with_concern(SafeguardingConcern::Regulatory),
        )
        .unwrap();
    assert!(matches!(
        session.confirm_summary(),
        Err(RedressError::AcknowledgmentRequired)
    ));
}

#[test]
fn test_ombudsman_progress_lands_on_final_step() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(
            ExtractedFacts::new(BodyType::NhsTrust)
                .with_steps_taken("I already sent everything to the ombudsman"),
        )
        .unwrap();

    let instance = session.confirm_summary().unwrap();
    assert_eq!(instance.current_index(), instance.steps.len() - 1);
}

#[test]
fn test_unknown_body_falls_back_to_generic_route() {
    let mut session = SessionWorkflow::with_today(today());
    session
        .submit_facts(ExtractedFacts::new(BodyType::OtherGov))
        .unwrap();
    let instance = session.confirm_summary().unwrap();
    assert_eq!(instance.key, "other_gov");
    assert!(session.request_letter().is_ok());
}
