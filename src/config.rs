use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::clipboard::{Clipboard, FileClipboard, StdoutClipboard};
use crate::labels::Language;
use crate::session::DEFAULT_COPIED_RESET;
use crate::target::TargetAi;

/// Where the export action writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClipboardConfig {
    #[default]
    Stdout,
    File(PathBuf),
    System,
}

impl ClipboardConfig {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(path) = value.strip_prefix("file:") {
            if path.is_empty() {
                return None;
            }
            return Some(ClipboardConfig::File(PathBuf::from(path)));
        }
        match value.to_lowercase().as_str() {
            "stdout" => Some(ClipboardConfig::Stdout),
            "system" => Some(ClipboardConfig::System),
            _ => None,
        }
    }

    pub fn open(&self) -> Result<Box<dyn Clipboard>> {
        match self {
            ClipboardConfig::Stdout => Ok(Box::new(StdoutClipboard)),
            ClipboardConfig::File(path) => Ok(Box::new(FileClipboard::new(path))),
            #[cfg(feature = "system-clipboard")]
            ClipboardConfig::System => Ok(Box::new(crate::clipboard::SystemClipboard)),
            #[cfg(not(feature = "system-clipboard"))]
            ClipboardConfig::System => {
                anyhow::bail!("system clipboard support requires the `system-clipboard` feature")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    pub target: TargetAi,
    pub copied_reset: Duration,
    pub clipboard: ClipboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            target: TargetAi::default(),
            copied_reset: DEFAULT_COPIED_RESET,
            clipboard: ClipboardConfig::default(),
        }
    }
}

fn env_or_default<T>(name: &str, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
    match env::var(name) {
        Ok(raw) => parse(&raw).unwrap_or_else(|| {
            warn!(var = name, value = %raw, "Ignoring invalid value");
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            language: env_or_default("PROMPT_LANG", defaults.language, |v| v.parse().ok()),
            target: env_or_default("PROMPT_TARGET", defaults.target, |v| v.parse().ok()),
            copied_reset: env_or_default("PROMPT_COPIED_RESET_MS", defaults.copied_reset, |v| {
                v.trim().parse::<u64>().ok().map(Duration::from_millis)
            }),
            clipboard: env_or_default(
                "PROMPT_CLIPBOARD",
                defaults.clipboard,
                ClipboardConfig::parse,
            ),
        }
    }
}
