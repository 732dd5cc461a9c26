//! The session workflow state machine.
//!
//! One `SessionWorkflow` per user session, independently owned, single
//! logical thread of execution. Transitions are forward-only and checked
//! against a closed table; the safeguarding gate is enforced here, not in
//! the presentation layer.

use chrono::{NaiveDate, Utc};
use redress_core::{DeadlineSet, ExtractedFacts, PathwayInstance, RedressError};
use redress_dates::{BankHolidayCalendar, DEFAULT_CALENDAR};
use redress_gate::GateVerdict;
use redress_out::{LetterPromptData, PromptRenderer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session stands in the workflow.
///
/// `Signposted` is the terminal outcome of a serious safeguarding
/// diversion: the complaint is not processed and the session must be
/// reset to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Intake,
    Summary,
    Pathway,
    Letter,
    Signposted,
}

impl WorkflowStatus {
    /// The closed transition table. Everything not listed is invalid.
    pub fn can_transition(self, to: WorkflowStatus) -> bool {
        use WorkflowStatus::*;
        matches!(
            (self, to),
            (Intake, Summary) | (Summary, Pathway) | (Summary, Signposted) | (Pathway, Letter)
        )
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            WorkflowStatus::Intake => "intake",
            WorkflowStatus::Summary => "summary",
            WorkflowStatus::Pathway => "pathway",
            WorkflowStatus::Letter => "letter",
            WorkflowStatus::Signposted => "signposted",
        };
        f.write_str(s)
    }
}

/// The composed prompt handed to the text-generation collaborator
#[derive(Debug, Clone, Serialize)]
pub struct ComposedPrompt {
    pub data: LetterPromptData,
    pub prompt: String,
}

/// One user's complaint session.
pub struct SessionWorkflow {
    status: WorkflowStatus,
    facts: Option<ExtractedFacts>,
    pathway: Option<PathwayInstance>,
    deadlines: Option<DeadlineSet>,
    /// Verdict retained while signposted, so the presentation layer can
    /// show the right contacts
    signposting: Option<GateVerdict>,
    /// One-time regulatory-notice acknowledgment, session local
    regulatory_acknowledged: bool,
    /// Set while an external call is outstanding; fact updates are
    /// rejected until the caller clears it
    busy: bool,
    today: NaiveDate,
    calendar: BankHolidayCalendar,
}

impl SessionWorkflow {
    pub fn new() -> Self {
        Self::with_today(Utc::now().date_naive())
    }

    /// Injectable "today" for determinism and tests
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            status: WorkflowStatus::Intake,
            facts: None,
            pathway: None,
            deadlines: None,
            signposting: None,
            regulatory_acknowledged: false,
            busy: false,
            today,
            calendar: DEFAULT_CALENDAR.clone(),
        }
    }

    pub fn with_calendar(mut self, calendar: BankHolidayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    // --- accessors -----------------------------------------------------

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn facts(&self) -> Option<&ExtractedFacts> {
        self.facts.as_ref()
    }

    pub fn pathway(&self) -> Option<&PathwayInstance> {
        self.pathway.as_ref()
    }

    pub fn deadlines(&self) -> Option<&DeadlineSet> {
        self.deadlines.as_ref()
    }

    /// The blocked verdict, when the session was signposted
    pub fn signposting(&self) -> Option<&GateVerdict> {
        self.signposting.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // --- busy flag -----------------------------------------------------

    /// Mark an external call outstanding. Fact updates are rejected until
    /// `finish_external_call`; the collaborating caller serializes inputs
    /// through this flag.
    pub fn begin_external_call(&mut self) {
        self.busy = true;
    }

    pub fn finish_external_call(&mut self) {
        self.busy = false;
    }

    // --- transitions ---------------------------------------------------

    /// Accept a complete facts record from the extraction layer.
    ///
    /// Valid from intake (first record) and from summary (the extraction
    /// layer revised the record before confirmation).
    pub fn submit_facts(&mut self, facts: ExtractedFacts) -> Result<(), RedressError> {
        if self.busy {
            return Err(RedressError::Busy);
        }
        match self.status {
            WorkflowStatus::Intake | WorkflowStatus::Summary => {
                tracing::info!(body_type = %facts.body_type, nation = %facts.nation, "facts received");
                self.facts = Some(facts);
                self.status = WorkflowStatus::Summary;
                Ok(())
            }
            from => Err(RedressError::InvalidTransition {
                from: from.to_string(),
                to: WorkflowStatus::Summary.to_string(),
            }),
        }
    }

    /// Acknowledge the regulatory notice. One-time per session; cleared
    /// only by `reset`.
    pub fn acknowledge_notice(&mut self) {
        self.regulatory_acknowledged = true;
    }

    /// Confirm the summary and move to the pathway, subject to the
    /// safeguarding gate.
    ///
    /// A serious concern diverts the session to `Signposted` and returns
    /// the block; no call sequence reaches the pathway afterwards short of
    /// a reset. A regulatory concern is rejected until the notice has been
    /// acknowledged this session.
    pub fn confirm_summary(&mut self) -> Result<&PathwayInstance, RedressError> {
        if self.status != WorkflowStatus::Summary {
            return Err(RedressError::InvalidTransition {
                from: self.status.to_string(),
                to: WorkflowStatus::Pathway.to_string(),
            });
        }
        let facts = self.facts.as_ref().ok_or(RedressError::MissingFacts)?;

        match redress_gate::evaluate(facts.safeguarding_concern, self.regulatory_acknowledged) {
            GateVerdict::Proceed => {}
            GateVerdict::AcknowledgeNotice { .. } => {
                tracing::info!("confirmation held for regulatory acknowledgment");
                return Err(RedressError::AcknowledgmentRequired);
            }
            verdict @ GateVerdict::Blocked { .. } => {
                let category = match &verdict {
                    GateVerdict::Blocked { category, .. } => category.clone(),
                    _ => unreachable!(),
                };
                tracing::warn!(category = %category, "safeguarding gate blocked the workflow");
                self.status = WorkflowStatus::Signposted;
                self.signposting = Some(verdict);
                return Err(RedressError::SafeguardingBlock { category });
            }
        }

        let template = redress_catalog::resolve(facts.body_type, facts.complaint_type, facts.nation);
        let instance =
            redress_infer::apply_progress(template, facts.steps_taken.as_deref().unwrap_or(""));
        self.deadlines =
            redress_dates::compute_deadlines(facts, &instance, self.today, &self.calendar);

        tracing::info!(
            pathway = %template.key,
            current_step = instance.current_index(),
            "pathway resolved"
        );

        self.pathway = Some(instance);
        self.status = WorkflowStatus::Pathway;
        Ok(self.pathway.as_ref().expect("pathway just set"))
    }

    /// Compose the letter prompt for the current step and move to the
    /// letter stage. Requires a resolved pathway.
    pub fn request_letter(&mut self) -> Result<ComposedPrompt, RedressError> {
        if self.status != WorkflowStatus::Pathway {
            return Err(RedressError::InvalidTransition {
                from: self.status.to_string(),
                to: WorkflowStatus::Letter.to_string(),
            });
        }
        let pathway = self.pathway.as_ref().ok_or(RedressError::MissingPathway)?;
        let facts = self.facts.as_ref().ok_or(RedressError::MissingFacts)?;

        let data = LetterPromptData::from_session(pathway, facts, self.deadlines.as_ref());
        let prompt = PromptRenderer::new()
            .render(&data)
            .map_err(|e| RedressError::TemplateError(e.to_string()))?;

        self.status = WorkflowStatus::Letter;
        tracing::info!("letter prompt composed");
        Ok(ComposedPrompt { data, prompt })
    }

    /// Discard the session's state and start a new intake. The only way
    /// out of `Signposted`, and the only thing that clears the regulatory
    /// acknowledgment.
    pub fn reset(&mut self) {
        tracing::info!(from = %self.status, "session reset");
        *self = Self::with_today(self.today);
    }
}

impl Default for SessionWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redress_core::{BodyType, SafeguardingConcern};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn facts() -> ExtractedFacts {
        ExtractedFacts::new(BodyType::Council).with_date("2025-03-15")
    }

    #[test]
    fn test_transition_table_is_forward_only() {
        use WorkflowStatus::*;
        assert!(Intake.can_transition(Summary));
        assert!(Summary.can_transition(Pathway));
        assert!(Summary.can_transition(Signposted));
        assert!(Pathway.can_transition(Letter));

        assert!(!Summary.can_transition(Intake));
        assert!(!Pathway.can_transition(Summary));
        assert!(!Letter.can_transition(Pathway));
        assert!(!Signposted.can_transition(Pathway));
        assert!(!Intake.can_transition(Pathway));
        assert!(!Intake.can_transition(Letter));
    }

    #[test]
    fn test_happy_path() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        assert_eq!(session.status(), WorkflowStatus::Intake);

        session.submit_facts(facts()).unwrap();
        assert_eq!(session.status(), WorkflowStatus::Summary);

        session.confirm_summary().unwrap();
        assert_eq!(session.status(), WorkflowStatus::Pathway);
        assert!(session.pathway().unwrap().is_valid());
        assert!(session.deadlines().is_some());

        let composed = session.request_letter().unwrap();
        assert_eq!(session.status(), WorkflowStatus::Letter);
        assert!(composed.prompt.contains("Council complaint"));
    }

    #[test]
    fn test_confirm_before_facts_is_invalid() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        assert!(matches!(
            session.confirm_summary(),
            Err(RedressError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_letter_before_pathway_is_invalid() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        session.submit_facts(facts()).unwrap();
        assert!(matches!(
            session.request_letter(),
            Err(RedressError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_busy_rejects_fact_updates() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        session.begin_external_call();
        assert!(matches!(
            session.submit_facts(facts()),
            Err(RedressError::Busy)
        ));
        session.finish_external_call();
        session.submit_facts(facts()).unwrap();
    }

    #[test]
    fn test_facts_can_be_revised_before_confirmation() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        session.submit_facts(facts()).unwrap();
        let revised = ExtractedFacts::new(BodyType::NhsTrust).with_date("2025-03-15");
        session.submit_facts(revised).unwrap();
        session.confirm_summary().unwrap();
        assert_eq!(session.pathway().unwrap().key, "nhs_trust");
    }

    #[test]
    fn test_no_event_date_means_no_deadlines() {
        let mut session = SessionWorkflow::with_today(d(2025, 6, 1));
        session
            .submit_facts(ExtractedFacts::new(BodyType::Council))
            .unwrap();
        session.confirm_summary().unwrap();
        assert!(session.deadlines().is_none());
    }
}
