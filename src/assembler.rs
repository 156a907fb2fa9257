//! Target-specific prompt assembly.
//!
//! [`assemble`] is pure: it reads the model and never caches the result, so
//! it can run on every edit or target change.

use tracing::trace;

use crate::prompt::{PromptField, PromptModel, PromptStructure};
use crate::target::TargetAi;

/// Separator between joined prompt fields.
pub const FIELD_SEPARATOR: &str = ", ";
/// Aspect ratio parameter always added for Midjourney.
pub const MIDJOURNEY_ASPECT: &str = " --ar 16:9";

/// Build the export string for `model` formatted for `target`.
///
/// Compact prompts are returned verbatim, since they are already formatted
/// by the generation step.
pub fn assemble(model: &PromptModel, target: TargetAi) -> String {
    let assembled = match model {
        PromptModel::Compact(compact) => compact.working().to_string(),
        PromptModel::Structured(structure) => assemble_structured(structure, target),
    };
    trace!(%target, len = assembled.len(), "Assembled prompt");
    assembled
}

/// Join the positive fields, skipping empty ones.
pub fn join_fields(structure: &PromptStructure) -> String {
    PromptField::POSITIVE
        .iter()
        .map(|&f| structure.get(f))
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

fn assemble_structured(structure: &PromptStructure, target: TargetAi) -> String {
    let mut prompt = join_fields(structure);
    let negative = structure.negative_prompt.as_str();

    match target {
        TargetAi::Midjourney => {
            prompt.push_str(MIDJOURNEY_ASPECT);
            if !negative.is_empty() {
                prompt.push_str(" --no ");
                prompt.push_str(negative);
            }
        }
        TargetAi::StableDiffusion => {
            if !negative.is_empty() {
                prompt.push_str("\nNegative prompt: ");
                prompt.push_str(negative);
            }
        }
        // DALL-E takes natural language only; the negative prompt is dropped.
        TargetAi::Dalle => {}
    }

    prompt
}
