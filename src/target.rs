use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Downstream generation model the assembled prompt is formatted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAi {
    #[default]
    #[serde(rename = "Midjourney")]
    Midjourney,
    #[serde(rename = "Stable Diffusion")]
    StableDiffusion,
    #[serde(rename = "DALL-E")]
    Dalle,
}

impl TargetAi {
    /// Selector choices, in display order.
    pub const ALL: [TargetAi; 3] = [
        TargetAi::Midjourney,
        TargetAi::StableDiffusion,
        TargetAi::Dalle,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            TargetAi::Midjourney => "Midjourney",
            TargetAi::StableDiffusion => "Stable Diffusion",
            TargetAi::Dalle => "DALL-E",
        }
    }
}

impl fmt::Display for TargetAi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target '{0}' (expected Midjourney, Stable Diffusion or DALL-E)")]
pub struct ParseTargetError(pub String);

impl FromStr for TargetAi {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "midjourney" | "mj" => Ok(TargetAi::Midjourney),
            "stable diffusion" | "stable-diffusion" | "stable_diffusion" | "sd" => {
                Ok(TargetAi::StableDiffusion)
            }
            "dall-e" | "dalle" | "dall_e" => Ok(TargetAi::Dalle),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}
