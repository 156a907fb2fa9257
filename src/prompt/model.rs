use serde::{Deserialize, Serialize};
use tracing::trace;

use super::field::PromptField;

/// A prompt split into named semantic fields.
///
/// Missing keys in a payload decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptStructure {
    pub subject: String,
    pub scene: String,
    pub mood: String,
    pub style: String,
    pub lighting: String,
    pub camera: String,
    pub details: String,
    pub negative_prompt: String,
}

impl PromptStructure {
    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::Subject => &self.subject,
            PromptField::Scene => &self.scene,
            PromptField::Mood => &self.mood,
            PromptField::Style => &self.style,
            PromptField::Lighting => &self.lighting,
            PromptField::Camera => &self.camera,
            PromptField::Details => &self.details,
            PromptField::NegativePrompt => &self.negative_prompt,
        }
    }

    fn slot(&mut self, field: PromptField) -> &mut String {
        match field {
            PromptField::Subject => &mut self.subject,
            PromptField::Scene => &mut self.scene,
            PromptField::Mood => &mut self.mood,
            PromptField::Style => &mut self.style,
            PromptField::Lighting => &mut self.lighting,
            PromptField::Camera => &mut self.camera,
            PromptField::Details => &mut self.details,
            PromptField::NegativePrompt => &mut self.negative_prompt,
        }
    }

    /// Replace one field, leaving the rest untouched.
    pub fn set(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        trace!(%field, ?value, "Setting prompt field");
        *self.slot(field) = value;
    }

    /// All fields with their values, in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (PromptField, &str)> + '_ {
        PromptField::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// A single free-form prompt and its editable working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactPrompt {
    original: String,
    working: String,
}

impl CompactPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        Self {
            working: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn working(&self) -> &str {
        &self.working
    }

    pub fn set_working(&mut self, text: impl Into<String>) {
        self.working = text.into();
    }

    pub fn is_edited(&self) -> bool {
        self.working != self.original
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no prompt is active")]
    NoActivePrompt,
    #[error("the active prompt is compact; it has no fields")]
    NotStructured,
    #[error("the active prompt is structured; edit its fields instead")]
    NotCompact,
}

/// The active prompt of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptModel {
    Structured(PromptStructure),
    Compact(CompactPrompt),
}

impl PromptModel {
    pub fn compact(text: impl Into<String>) -> Self {
        PromptModel::Compact(CompactPrompt::new(text))
    }

    pub fn set_field(
        &mut self,
        field: PromptField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        match self {
            PromptModel::Structured(structure) => {
                structure.set(field, value);
                Ok(())
            }
            PromptModel::Compact(_) => Err(EditError::NotStructured),
        }
    }

    pub fn set_compact_text(&mut self, value: impl Into<String>) -> Result<(), EditError> {
        match self {
            PromptModel::Compact(compact) => {
                compact.set_working(value);
                Ok(())
            }
            PromptModel::Structured(_) => Err(EditError::NotCompact),
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, PromptModel::Compact(_))
    }
}

impl From<PromptStructure> for PromptModel {
    fn from(structure: PromptStructure) -> Self {
        PromptModel::Structured(structure)
    }
}
