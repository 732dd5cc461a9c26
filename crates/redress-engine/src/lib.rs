//! Redress Engine: the session workflow.
//!
//! Orchestrates the core components around a single user's session:
//! facts arrive from the external extraction layer, the summary is
//! confirmed through the safeguarding gate, the pathway is resolved with
//! progress and deadlines applied, and the letter prompt is composed on
//! request.

pub mod session;

pub use session::{ComposedPrompt, SessionWorkflow, WorkflowStatus};
