//! Redress Out: the prompt payload for letter drafting.
//!
//! Composes the payload handed to the external text-generation service:
//! the resolved pathway's current step, title and legislation reference,
//! plus the facts record's display fields. The engine supplies this
//! payload; it never calls the generation service itself.

pub mod payload;
pub mod renderer;

pub use payload::LetterPromptData;
pub use renderer::{compose_letter_prompt, OutError, PromptRenderer};
