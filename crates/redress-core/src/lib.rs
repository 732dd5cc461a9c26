//! Redress Core: Data Model and Invariants
//!
//! Shared types for the pathway routing engine: the catalog template
//! shapes, the session-scoped pathway instance, the structured facts
//! record supplied by the external extraction layer, and the derived
//! deadline set.

pub mod deadline;
pub mod error;
pub mod facts;
pub mod pathway;
pub mod timing;

pub use deadline::DeadlineSet;
pub use error::RedressError;
pub use facts::{BodyType, ComplaintType, ExtractedFacts, Nation, SafeguardingConcern};
pub use pathway::{InstanceStep, PathwayInstance, PathwayTemplate, StepTemplate};
pub use timing::TimingRule;

/// Version of the Redress engine
pub const REDRESS_VERSION: &str = "1.0.0";
