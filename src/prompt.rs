//! In-memory prompt representation.
//!
//! A prompt is either a set of named fields or a single compact string.
//! [`PromptModel`] keeps the two mutually exclusive.

pub mod field;
pub mod model;

pub use field::{ParseFieldError, PromptField};
pub use model::{CompactPrompt, EditError, PromptModel, PromptStructure};
