//! Pathway templates and session-scoped instances.
//!
//! Templates are immutable catalog data. A session works on a
//! `PathwayInstance`, a deep copy carrying the mutable `current` marker,
//! so shared catalog objects are never touched (clone-on-instantiate).

use crate::timing::TimingRule;
use serde::{Deserialize, Serialize};

/// One stage in an escalation pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTemplate {
    pub name: String,
    pub description: String,
    /// Human-readable response timeline (e.g. "20 working days")
    pub timeline_text: String,
    /// Canonical rule derived from `timeline_text`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_rule: Option<TimingRule>,
    /// Human-readable acknowledgment timeline, where the body commits to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment_rule: Option<TimingRule>,
    /// Condition under which the user should move to the next step
    pub escalation_trigger: String,
    /// Contact surface: opaque strings, never validated by the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Items the user should gather before this step
    #[serde(default)]
    pub info_needed: Vec<String>,
    /// Template-level default entry point marker
    #[serde(default)]
    pub is_default_current: bool,
}

impl StepTemplate {
    /// Create a step, deriving canonical timing from the timeline text
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        timeline_text: impl Into<String>,
        escalation_trigger: impl Into<String>,
    ) -> Self {
        let timeline_text = timeline_text.into();
        let timeline_rule = TimingRule::from_text(&timeline_text);
        Self {
            name: name.into(),
            description: description.into(),
            timeline_text,
            timeline_rule,
            acknowledgment_text: None,
            acknowledgment_rule: None,
            escalation_trigger: escalation_trigger.into(),
            portal_url: None,
            postal_address: None,
            email: None,
            info_needed: Vec::new(),
            is_default_current: false,
        }
    }

    pub fn with_acknowledgment(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.acknowledgment_rule = TimingRule::from_text(&text);
        self.acknowledgment_text = Some(text);
        self
    }

    pub fn with_portal(mut self, url: impl Into<String>) -> Self {
        self.portal_url = Some(url.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.postal_address = Some(address.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_info(mut self, item: impl Into<String>) -> Self {
        self.info_needed.push(item.into());
        self
    }

    /// Mark as the template's default entry point
    pub fn default_current(mut self) -> Self {
        self.is_default_current = true;
        self
    }
}

/// An immutable escalation pathway as defined in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayTemplate {
    /// Catalog key, e.g. "nhs_trust", "police_scotland", "dwp_decision"
    pub key: String,
    pub title: String,
    pub description: String,
    /// Human-readable overall deadline rule (e.g. "12 months")
    pub time_limit: String,
    pub time_limit_detail: String,
    #[serde(default)]
    pub pre_requirements: Vec<String>,
    #[serde(default)]
    pub evidence_guidance: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub legislation: String,
    pub steps: Vec<StepTemplate>,
}

impl PathwayTemplate {
    /// Validate catalog invariants: at least one step and exactly one
    /// default entry point. A violation is a programmer error in the
    /// shipped catalog, caught by catalog tests.
    pub fn validate(&self) -> Result<(), String> {
        if self.steps.is_empty() {
            return Err(format!("template '{}' has no steps", self.key));
        }
        let defaults = self.steps.iter().filter(|s| s.is_default_current).count();
        if defaults != 1 {
            return Err(format!(
                "template '{}' has {} default-current steps, expected exactly 1",
                self.key, defaults
            ));
        }
        Ok(())
    }

    /// Index of the template's default entry point
    pub fn default_step_index(&self) -> usize {
        self.steps
            .iter()
            .position(|s| s.is_default_current)
            .unwrap_or(0)
    }

    /// Deep-copy into a session-scoped instance with the default step current
    pub fn instantiate(&self) -> PathwayInstance {
        let default_index = self.default_step_index();
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| InstanceStep {
                template: s.clone(),
                current: i == default_index,
            })
            .collect();
        PathwayInstance {
            key: self.key.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            time_limit: self.time_limit.clone(),
            time_limit_detail: self.time_limit_detail.clone(),
            pre_requirements: self.pre_requirements.clone(),
            evidence_guidance: self.evidence_guidance.clone(),
            warnings: self.warnings.clone(),
            tips: self.tips.clone(),
            legislation: self.legislation.clone(),
            steps,
        }
    }
}

/// A step within a session's pathway instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStep {
    #[serde(flatten)]
    pub template: StepTemplate,
    /// Session-local marker: the user's next actionable stage
    pub current: bool,
}

/// A session-scoped, mutable copy of a pathway template.
///
/// Invariant: exactly one step is current at all times. `set_current` is
/// the only mutation and clears every other marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayInstance {
    pub key: String,
    pub title: String,
    pub description: String,
    pub time_limit: String,
    pub time_limit_detail: String,
    pub pre_requirements: Vec<String>,
    pub evidence_guidance: Vec<String>,
    pub warnings: Vec<String>,
    pub tips: Vec<String>,
    pub legislation: String,
    pub steps: Vec<InstanceStep>,
}

impl PathwayInstance {
    /// Reassign the current marker, clamping to the last step
    pub fn set_current(&mut self, index: usize) {
        let index = index.min(self.steps.len().saturating_sub(1));
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.current = i == index;
        }
        debug_assert_eq!(self.steps.iter().filter(|s| s.current).count(), 1);
    }

    /// Index of the current step
    pub fn current_index(&self) -> usize {
        self.steps
            .iter()
            .position(|s| s.current)
            .expect("pathway instance invariant: one step is always current")
    }

    /// The current step itself
    pub fn current_step(&self) -> &StepTemplate {
        &self.steps[self.current_index()].template
    }

    /// Check the exactly-one-current invariant
    pub fn is_valid(&self) -> bool {
        self.steps.iter().filter(|s| s.current).count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> PathwayTemplate {
        PathwayTemplate {
            key: "test".to_string(),
            title: "Test pathway".to_string(),
            description: "A pathway for tests".to_string(),
            time_limit: "12 months".to_string(),
            time_limit_detail: "From the date of the event".to_string(),
            pre_requirements: vec![],
            evidence_guidance: vec![],
            warnings: vec![],
            tips: vec![],
            legislation: "Test Regulations 2020".to_string(),
            steps: vec![
                StepTemplate::new("Raise informally", "Talk to the service", "5 working days", "No response")
                    .default_current(),
                StepTemplate::new("Formal complaint", "Write to the body", "20 working days", "Unsatisfied")
                    .with_acknowledgment("3 working days"),
                StepTemplate::new("Ombudsman", "Independent review", "6 months", "Final"),
            ],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(template().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_steps() {
        let mut t = template();
        t.steps.clear();
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_multiple_defaults() {
        let mut t = template();
        t.steps[2].is_default_current = true;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_instantiate_marks_default() {
        let instance = template().instantiate();
        assert!(instance.is_valid());
        assert_eq!(instance.current_index(), 0);
        assert_eq!(instance.current_step().name, "Raise informally");
    }

    #[test]
    fn test_set_current_clears_others() {
        let mut instance = template().instantiate();
        instance.set_current(2);
        assert!(instance.is_valid());
        assert_eq!(instance.current_index(), 2);
    }

    #[test]
    fn test_set_current_clamps() {
        let mut instance = template().instantiate();
        instance.set_current(99);
        assert_eq!(instance.current_index(), 2);
        assert!(instance.is_valid());
    }

    #[test]
    fn test_instantiate_does_not_touch_template() {
        let t = template();
        let mut instance = t.instantiate();
        instance.set_current(1);
        // Catalog data unaffected by session mutation
        assert!(t.steps[0].is_default_current);
        assert!(!t.steps[1].is_default_current);
    }

    #[test]
    fn test_timing_rules_derived() {
        let t = template();
        assert_eq!(t.steps[0].timeline_rule, Some(TimingRule::WorkingDays(5)));
        assert_eq!(t.steps[1].acknowledgment_rule, Some(TimingRule::WorkingDays(3)));
        assert_eq!(t.steps[2].timeline_rule, Some(TimingRule::Months(6)));
    }
}
