//! Structured facts record supplied by the external extraction layer.
//!
//! The engine never parses conversational text itself (beyond the
//! progress-inference heuristic); it consumes this record read-only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of public body the complaint is against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    NhsTrust,
    Gp,
    SocialCare,
    Council,
    Police,
    School,
    Dwp,
    Hmrc,
    OtherGov,
}

impl BodyType {
    /// Catalog key stem for this body type
    pub fn key(&self) -> &'static str {
        match self {
            BodyType::NhsTrust => "nhs_trust",
            BodyType::Gp => "gp",
            BodyType::SocialCare => "social_care",
            BodyType::Council => "council",
            BodyType::Police => "police",
            BodyType::School => "school",
            BodyType::Dwp => "dwp",
            BodyType::Hmrc => "hmrc",
            BodyType::OtherGov => "other_gov",
        }
    }

    /// All supported body types, for exhaustive catalog checks
    pub fn all() -> [BodyType; 9] {
        [
            BodyType::NhsTrust,
            BodyType::Gp,
            BodyType::SocialCare,
            BodyType::Council,
            BodyType::Police,
            BodyType::School,
            BodyType::Dwp,
            BodyType::Hmrc,
            BodyType::OtherGov,
        ]
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind of complaint; meaningful chiefly for DWP, where challenging a
/// benefit decision and complaining about service quality are entirely
/// different routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintType {
    Decision,
    Service,
    #[default]
    General,
}

/// UK nation, which selects the devolved escalation route where one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Nation {
    #[default]
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

impl Nation {
    /// Catalog key suffix for nation-variant templates; England has none
    /// because base templates carry the England route.
    pub fn key_suffix(&self) -> Option<&'static str> {
        match self {
            Nation::England => None,
            Nation::Scotland => Some("scotland"),
            Nation::Wales => Some("wales"),
            Nation::NorthernIreland => Some("northern_ireland"),
        }
    }

    pub fn all() -> [Nation; 4] {
        [
            Nation::England,
            Nation::Scotland,
            Nation::Wales,
            Nation::NorthernIreland,
        ]
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nation::England => write!(f, "England"),
            Nation::Scotland => write!(f, "Scotland"),
            Nation::Wales => write!(f, "Wales"),
            Nation::NorthernIreland => write!(f, "Northern Ireland"),
        }
    }
}

/// Classification of the complaint narrative, produced upstream.
///
/// Anything other than `None` diverts or gates the ordinary workflow:
/// serious categories are signposted out of the complaints process
/// entirely, `Regulatory` requires an acknowledged notice first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafeguardingConcern {
    #[default]
    None,
    Emergency,
    Crime,
    ChildSafeguarding,
    AdultSafeguarding,
    Regulatory,
}

impl SafeguardingConcern {
    /// Serious concerns block the complaints workflow outright
    pub fn is_serious(&self) -> bool {
        matches!(
            self,
            SafeguardingConcern::Emergency
                | SafeguardingConcern::Crime
                | SafeguardingConcern::ChildSafeguarding
                | SafeguardingConcern::AdultSafeguarding
        )
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SafeguardingConcern::None => "none",
            SafeguardingConcern::Emergency => "emergency",
            SafeguardingConcern::Crime => "crime",
            SafeguardingConcern::ChildSafeguarding => "child_safeguarding",
            SafeguardingConcern::AdultSafeguarding => "adult_safeguarding",
            SafeguardingConcern::Regulatory => "regulatory",
        }
    }
}

impl fmt::Display for SafeguardingConcern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The structured facts record for one complaint session.
///
/// `complaint_summary`, `desired_outcome` and `body_name` are display-only:
/// they flow into the letter prompt payload but never into routing logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFacts {
    pub body_type: BodyType,
    #[serde(default)]
    pub complaint_type: ComplaintType,
    #[serde(default)]
    pub nation: Nation,
    /// Free-text specific event date (e.g. "15/03/2025")
    #[serde(default)]
    pub date_specific: Option<String>,
    /// Free-text approximate period (e.g. "around March 2025")
    #[serde(default)]
    pub date_range: Option<String>,
    /// Free-text description of steps already taken
    #[serde(default)]
    pub steps_taken: Option<String>,
    #[serde(default)]
    pub safeguarding_concern: SafeguardingConcern,
    #[serde(default)]
    pub body_name: Option<String>,
    #[serde(default)]
    pub complaint_summary: Option<String>,
    #[serde(default)]
    pub desired_outcome: Option<String>,
}

impl ExtractedFacts {
    pub fn new(body_type: BodyType) -> Self {
        Self {
            body_type,
            complaint_type: ComplaintType::General,
            nation: Nation::England,
            date_specific: None,
            date_range: None,
            steps_taken: None,
            safeguarding_concern: SafeguardingConcern::None,
            body_name: None,
            complaint_summary: None,
            desired_outcome: None,
        }
    }

    pub fn with_complaint_type(mut self, complaint_type: ComplaintType) -> Self {
        self.complaint_type = complaint_type;
        self
    }

    pub fn with_nation(mut self, nation: Nation) -> Self {
        self.nation = nation;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date_specific = Some(date.into());
        self
    }

    pub fn with_date_range(mut self, range: impl Into<String>) -> Self {
        self.date_range = Some(range.into());
        self
    }

    pub fn with_steps_taken(mut self, text: impl Into<String>) -> Self {
        self.steps_taken = Some(text.into());
        self
    }

    pub fn with_concern(mut self, concern: SafeguardingConcern) -> Self {
        self.safeguarding_concern = concern;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.complaint_summary = Some(summary.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_type_keys_are_snake_case() {
        for body in BodyType::all() {
            let key = body.key();
            assert!(!key.is_empty());
            assert_eq!(key, key.to_lowercase());
        }
    }

    #[test]
    fn test_nation_suffix() {
        assert_eq!(Nation::England.key_suffix(), None);
        assert_eq!(Nation::Scotland.key_suffix(), Some("scotland"));
        assert_eq!(
            Nation::NorthernIreland.key_suffix(),
            Some("northern_ireland")
        );
    }

    #[test]
    fn test_serious_concerns() {
        assert!(SafeguardingConcern::Crime.is_serious());
        assert!(SafeguardingConcern::Emergency.is_serious());
        assert!(SafeguardingConcern::ChildSafeguarding.is_serious());
        assert!(SafeguardingConcern::AdultSafeguarding.is_serious());
        assert!(!SafeguardingConcern::Regulatory.is_serious());
        assert!(!SafeguardingConcern::None.is_serious());
    }

    #[test]
    fn test_facts_serde_snake_case() {
        let facts = ExtractedFacts::new(BodyType::NhsTrust)
            .with_nation(Nation::NorthernIreland)
            .with_concern(SafeguardingConcern::ChildSafeguarding);

        let json = serde_json::to_string(&facts).unwrap();
        assert!(json.contains("nhs_trust"));
        assert!(json.contains("northern_ireland"));
        assert!(json.contains("child_safeguarding"));

        let parsed: ExtractedFacts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.body_type, BodyType::NhsTrust);
    }

    #[test]
    fn test_facts_defaults_on_sparse_input() {
        let facts: ExtractedFacts = serde_json::from_str(r#"{"body_type":"council"}"#).unwrap();
        assert_eq!(facts.body_type, BodyType::Council);
        assert_eq!(facts.complaint_type, ComplaintType::General);
        assert_eq!(facts.nation, Nation::England);
        assert_eq!(facts.safeguarding_concern, SafeguardingConcern::None);
    }
}
