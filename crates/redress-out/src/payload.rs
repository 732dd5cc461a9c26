//! The structured payload behind the letter prompt.

use chrono::NaiveDate;
use redress_core::{DeadlineSet, ExtractedFacts, PathwayInstance};
use serde::{Deserialize, Serialize};

/// Everything the text-generation collaborator needs to draft the letter
/// for the user's current step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterPromptData {
    pub pathway_title: String,
    pub legislation: String,
    pub step_name: String,
    pub step_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_name: Option<String>,
    pub nation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_by: Option<NaiveDate>,
}

impl LetterPromptData {
    /// Assemble the payload from the session's resolved state
    pub fn from_session(
        instance: &PathwayInstance,
        facts: &ExtractedFacts,
        deadlines: Option<&DeadlineSet>,
    ) -> Self {
        let step = instance.current_step();
        Self {
            pathway_title: instance.title.clone(),
            legislation: instance.legislation.clone(),
            step_name: step.name.clone(),
            step_description: step.description.clone(),
            portal_url: step.portal_url.clone(),
            postal_address: step.postal_address.clone(),
            email: step.email.clone(),
            body_name: facts.body_name.clone(),
            nation: facts.nation.to_string(),
            complaint_summary: facts.complaint_summary.clone(),
            desired_outcome: facts.desired_outcome.clone(),
            event_date_text: facts
                .date_specific
                .clone()
                .or_else(|| facts.date_range.clone()),
            submit_by: deadlines.and_then(|d| d.submit_by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redress_core::{BodyType, ComplaintType, Nation};

    #[test]
    fn test_payload_carries_current_step() {
        let template =
            redress_catalog::resolve(BodyType::Council, ComplaintType::General, Nation::England);
        let mut instance = template.instantiate();
        instance.set_current(1);

        let facts = redress_core::ExtractedFacts::new(BodyType::Council)
            .with_summary("Missed bin collections for six weeks");

        let data = LetterPromptData::from_session(&instance, &facts, None);
        assert_eq!(data.step_name, "Stage 1 formal complaint");
        assert_eq!(data.legislation, instance.legislation);
        assert_eq!(
            data.complaint_summary.as_deref(),
            Some("Missed bin collections for six weeks")
        );
        assert_eq!(data.submit_by, None);
    }
}
