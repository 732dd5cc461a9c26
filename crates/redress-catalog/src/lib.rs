//! Redress Catalog: versioned escalation pathways and the resolver.
//!
//! The catalog is static data built once and shared read-only across
//! sessions. Each (body type, nation) combination resolves to an
//! independent, independently editable template; the recurring shapes
//! (ombudsman escalation, formal-complaint stages) are produced by shared
//! constructors rather than hand-duplicated.

pub mod resolver;
pub mod templates;

pub use resolver::{get, keys, resolve};

/// Version of the pathway catalog data
pub const CATALOG_VERSION: &str = "2025.08";
