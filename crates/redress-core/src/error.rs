//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedressError {
    #[error("TRANSITION/invalid: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("GATE/blocked: {category}")]
    SafeguardingBlock { category: String },

    #[error("GATE/acknowledgment required before proceeding")]
    AcknowledgmentRequired,

    #[error("SESSION/busy: external call outstanding")]
    Busy,

    #[error("SESSION/no resolved pathway")]
    MissingPathway,

    #[error("SESSION/no facts record")]
    MissingFacts,

    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("TEMPLATE/{0}")]
    TemplateError(String),
}
