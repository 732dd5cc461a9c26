//! Redress Infer: progress inference over "steps already taken" text.
//!
//! Maps a free-text statement of what the user has already done onto a
//! position within their resolved pathway, using an ordered
//! keyword-priority policy table. Never errors: anything unrecognisable
//! degrades to the start of the pathway.

pub mod classifier;
pub mod rules;

pub use classifier::{apply_progress, apply_progress_with};
pub use rules::{PolicyError, ProgressClass, ProgressPolicy, ProgressRule, DEFAULT_POLICY};
