//! The progress classifier.
//!
//! A heuristic, not a parser: ambiguous or contradictory text resolves
//! through the fixed class priority (ombudsman > formal > informal), which
//! assumes the user is further along when several classes match.

use crate::rules::{ProgressClass, ProgressPolicy, DEFAULT_POLICY};
use redress_core::{PathwayInstance, PathwayTemplate};

/// Instantiate a template and mark the step the user has most plausibly
/// reached, based on their free-text "steps already taken" statement.
///
/// The result always has exactly one current step; unclassifiable text
/// falls back to the first step, empty or "none" text to the template's
/// default entry point.
pub fn apply_progress(template: &PathwayTemplate, steps_taken: &str) -> PathwayInstance {
    apply_progress_with(template, steps_taken, &DEFAULT_POLICY)
}

/// As `apply_progress`, with an explicit policy table
pub fn apply_progress_with(
    template: &PathwayTemplate,
    steps_taken: &str,
    policy: &ProgressPolicy,
) -> PathwayInstance {
    let mut instance = template.instantiate();
    let text = steps_taken.trim().to_lowercase();

    if text.is_empty() || policy.is_none_statement(&text) {
        return instance;
    }

    let last = instance.steps.len() - 1;
    match policy.classify(&text) {
        Some(ProgressClass::Ombudsman) => instance.set_current(last),
        Some(ProgressClass::Formal) => {
            let matched = formal_step_index(template, policy);
            instance.set_current((matched + 1).min(last));
        }
        Some(ProgressClass::Informal) => {
            instance.set_current(if last >= 1 { 1 } else { 0 });
        }
        None => instance.set_current(0),
    }

    debug_assert!(instance.is_valid());
    instance
}

/// Index of the first step that itself reads as the formal stage.
///
/// When no step matches (short or unusually shaped pathways) the first
/// step stands in, so the outcome is "the step after where they got to".
fn formal_step_index(template: &PathwayTemplate, policy: &ProgressPolicy) -> usize {
    let phrases = policy.phrases_for(ProgressClass::Formal);
    template
        .steps
        .iter()
        .position(|step| {
            let haystack = format!("{} {}", step.name, step.description).to_lowercase();
            phrases.iter().any(|p| haystack.contains(p.as_str()))
        })
        .unwrap_or(0)
}
