//! The keyword policy table.
//!
//! Which phrases imply which progress class is a judgment call, not
//! business logic, so the mapping lives in a YAML document with a
//! compiled-in default rather than in code.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compiled-in default policy (config/progress-rules.yaml)
const DEFAULT_RULES_YAML: &str = include_str!("../../../config/progress-rules.yaml");

pub static DEFAULT_POLICY: Lazy<ProgressPolicy> = Lazy::new(|| {
    ProgressPolicy::from_yaml(DEFAULT_RULES_YAML).expect("built-in progress rules parse")
});

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("POLICY/read: {0}")]
    Read(#[from] std::io::Error),
    #[error("POLICY/parse: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("POLICY/invalid: {0}")]
    Invalid(String),
}

/// A progress class, ordered by how far along the complainant is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressClass {
    /// Already reached an independent/ombudsman-level body
    Ombudsman,
    /// Completed a formal or written complaint stage
    Formal,
    /// Only an informal first contact so far
    Informal,
}

/// One ordered rule: phrases implying a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRule {
    pub class: ProgressClass,
    pub phrases: Vec<String>,
}

/// The full ordered policy, evaluated top-to-bottom with first match wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressPolicy {
    pub version: String,
    pub rules: Vec<ProgressRule>,
    /// Phrases meaning "I have done nothing yet"
    #[serde(default)]
    pub none_phrases: Vec<String>,
}

impl ProgressPolicy {
    /// Parse a policy document, lowercasing phrases for matching
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        let mut policy: ProgressPolicy = serde_yaml::from_str(yaml)?;
        if policy.rules.is_empty() {
            return Err(PolicyError::Invalid("no rules defined".to_string()));
        }
        for rule in &mut policy.rules {
            if rule.phrases.is_empty() {
                return Err(PolicyError::Invalid(format!(
                    "rule for class {:?} has no phrases",
                    rule.class
                )));
            }
            for phrase in &mut rule.phrases {
                *phrase = phrase.to_lowercase();
            }
        }
        for phrase in &mut policy.none_phrases {
            *phrase = phrase.to_lowercase();
        }
        Ok(policy)
    }

    /// Load a replacement policy from a file
    pub fn load(path: &str) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Classify lowercase text, first matching rule wins
    pub fn classify(&self, text: &str) -> Option<ProgressClass> {
        self.rules
            .iter()
            .find(|rule| rule.phrases.iter().any(|p| text.contains(p.as_str())))
            .map(|rule| rule.class)
    }

    /// Whether the text amounts to "nothing done yet"
    pub fn is_none_statement(&self, text: &str) -> bool {
        self.none_phrases.iter().any(|p| p == text)
    }

    /// Phrases for a given class (used to locate the matching step)
    pub fn phrases_for(&self, class: ProgressClass) -> &[String] {
        self.rules
            .iter()
            .find(|r| r.class == class)
            .map(|r| r.phrases.as_slice())
            .unwrap_or(&[])
    }
}
