//! What the generation backend hands to the editor.
//!
//! The backend itself lives elsewhere. This module only describes its
//! outcomes and decodes the JSON it emits.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::labels::LabelKey;
use crate::prompt::{PromptModel, PromptStructure};

/// Kind of prompt the user asked the backend for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptMode {
    Professional,
    Compact,
    Detailed,
    Video,
}

impl PromptMode {
    pub fn title_key(self) -> LabelKey {
        match self {
            PromptMode::Professional => LabelKey::ProfessionalPromptTitle,
            PromptMode::Compact => LabelKey::CompactPromptTitle,
            PromptMode::Detailed => LabelKey::StructuredPromptTitle,
            PromptMode::Video => LabelKey::VideoPromptTitle,
        }
    }

    /// Mode implied by a payload when the caller did not name one.
    pub fn for_model(model: &PromptModel) -> Self {
        if model.is_compact() {
            PromptMode::Compact
        } else {
            PromptMode::Detailed
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptMode::Professional => "professional",
            PromptMode::Compact => "compact",
            PromptMode::Detailed => "detailed",
            PromptMode::Video => "video",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prompt mode '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for PromptMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" | "pro" => Ok(PromptMode::Professional),
            "compact" => Ok(PromptMode::Compact),
            "detailed" | "structured" => Ok(PromptMode::Detailed),
            "video" => Ok(PromptMode::Video),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// A discrete signal from the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    Started(PromptMode),
    Structured(PromptStructure),
    Compact(String),
    /// Opaque upstream error message, shown verbatim.
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload must be a JSON string or object, got {0}")]
    Shape(&'static str),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Compact(String),
    Structured(PromptStructure),
}

/// Decode generator output: a JSON string is a compact prompt, a JSON
/// object a structured one.
pub fn parse_payload(raw: &str) -> Result<PromptModel, PayloadError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let shape = match &value {
        serde_json::Value::String(_) | serde_json::Value::Object(_) => None,
        serde_json::Value::Null => Some("null"),
        serde_json::Value::Bool(_) => Some("a boolean"),
        serde_json::Value::Number(_) => Some("a number"),
        serde_json::Value::Array(_) => Some("an array"),
    };
    if let Some(shape) = shape {
        return Err(PayloadError::Shape(shape));
    }

    let model = match serde_json::from_value::<Payload>(value)? {
        Payload::Compact(text) => PromptModel::compact(text),
        Payload::Structured(structure) => PromptModel::Structured(structure),
    };
    Ok(model)
}

/// Read and decode a payload file.
#[instrument(level = "debug")]
pub async fn load_payload(path: &Path) -> Result<PromptModel> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read payload {}", path.display()))?;
    debug!(size = raw.len(), "Read payload file");
    let model = parse_payload(&raw)
        .with_context(|| format!("failed to decode payload {}", path.display()))?;
    Ok(model)
}

impl From<PromptModel> for GenerationEvent {
    fn from(model: PromptModel) -> Self {
        match model {
            PromptModel::Structured(structure) => GenerationEvent::Structured(structure),
            PromptModel::Compact(compact) => {
                GenerationEvent::Compact(compact.original().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_payload_is_compact() {
        let model = parse_payload(r#""a red kite over dunes --v 6""#).unwrap();
        assert_eq!(model, PromptModel::compact("a red kite over dunes --v 6"));
    }

    #[test]
    fn object_payload_is_structured() {
        let model =
            parse_payload(r#"{"subject":"a red kite","lighting":"golden hour"}"#).unwrap();
        let PromptModel::Structured(s) = model else {
            panic!("expected structured prompt");
        };
        assert_eq!(s.subject, "a red kite");
        assert_eq!(s.lighting, "golden hour");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(parse_payload("[1,2]"), Err(PayloadError::Shape("an array"))));
        assert!(matches!(parse_payload("null"), Err(PayloadError::Shape("null"))));
        assert!(matches!(parse_payload("{"), Err(PayloadError::Json(_))));
    }

    #[test]
    fn mode_titles() {
        assert_eq!(PromptMode::Detailed.title_key(), LabelKey::StructuredPromptTitle);
        assert_eq!("pro".parse(), Ok(PromptMode::Professional));
    }
}
