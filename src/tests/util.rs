use async_trait::async_trait;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::prompt::PromptStructure;

/// A clipboard whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingClipboard;

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("clipboard denied".to_string()))
    }
}

/// The astronaut prompt: subject, mood and a negative prompt set.
pub fn sample_structure() -> PromptStructure {
    PromptStructure {
        subject: "a lone astronaut".to_string(),
        mood: "melancholic".to_string(),
        negative_prompt: "blurry".to_string(),
        ..Default::default()
    }
}

pub fn full_structure() -> PromptStructure {
    PromptStructure {
        subject: "a lighthouse keeper".to_string(),
        scene: "storm-battered cliff".to_string(),
        mood: "defiant".to_string(),
        style: "oil painting".to_string(),
        lighting: "lightning flashes".to_string(),
        camera: "low angle".to_string(),
        details: "highly detailed".to_string(),
        negative_prompt: "text, watermark".to_string(),
    }
}
