use std::fmt;
use std::str::FromStr;

use crate::labels::LabelKey;

/// One of the fixed semantic fields of a structured prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromptField {
    Subject,
    Scene,
    Mood,
    Style,
    Lighting,
    Camera,
    Details,
    NegativePrompt,
}

impl PromptField {
    /// Every field in canonical order.
    pub const ALL: [PromptField; 8] = [
        PromptField::Subject,
        PromptField::Scene,
        PromptField::Mood,
        PromptField::Style,
        PromptField::Lighting,
        PromptField::Camera,
        PromptField::Details,
        PromptField::NegativePrompt,
    ];

    /// Fields joined into the positive prompt, in join order.
    pub const POSITIVE: [PromptField; 7] = [
        PromptField::Subject,
        PromptField::Scene,
        PromptField::Mood,
        PromptField::Style,
        PromptField::Lighting,
        PromptField::Camera,
        PromptField::Details,
    ];

    /// The camelCase key used in generator payloads.
    pub fn key(self) -> &'static str {
        match self {
            PromptField::Subject => "subject",
            PromptField::Scene => "scene",
            PromptField::Mood => "mood",
            PromptField::Style => "style",
            PromptField::Lighting => "lighting",
            PromptField::Camera => "camera",
            PromptField::Details => "details",
            PromptField::NegativePrompt => "negativePrompt",
        }
    }

    pub fn label_key(self) -> LabelKey {
        match self {
            PromptField::Subject => LabelKey::Subject,
            PromptField::Scene => LabelKey::Scene,
            PromptField::Mood => LabelKey::Mood,
            PromptField::Style => LabelKey::Style,
            PromptField::Lighting => LabelKey::Lighting,
            PromptField::Camera => LabelKey::Camera,
            PromptField::Details => LabelKey::Details,
            PromptField::NegativePrompt => LabelKey::NegativePrompt,
        }
    }

    /// Editor height for this field.
    pub fn editor_rows(self) -> u8 {
        match self {
            PromptField::Subject | PromptField::Scene => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for PromptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prompt field '{0}'")]
pub struct ParseFieldError(pub String);

impl FromStr for PromptField {
    type Err = ParseFieldError;

    /// Accepts the payload key case-insensitively, plus `negative` and
    /// `negative_prompt` for the negative prompt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let field = match lowered.as_str() {
            "subject" => PromptField::Subject,
            "scene" => PromptField::Scene,
            "mood" => PromptField::Mood,
            "style" => PromptField::Style,
            "lighting" => PromptField::Lighting,
            "camera" => PromptField::Camera,
            "details" => PromptField::Details,
            "negativeprompt" | "negative_prompt" | "negative-prompt" | "negative" => {
                PromptField::NegativePrompt
            }
            _ => return Err(ParseFieldError(s.to_string())),
        };
        Ok(field)
    }
}
