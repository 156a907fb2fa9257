//! Clipboard adapters for the export action.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination of an exported prompt.
#[async_trait]
pub trait Clipboard: Send {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes the prompt to stdout, one export per line block.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut out = tokio::io::stdout();
        out.write_all(text.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }
}

/// Replaces the contents of a file with each export.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        tokio::fs::write(&self.path, text).await?;
        debug!(path = %self.path.display(), len = text.len(), "Wrote prompt to clipboard file");
        Ok(())
    }
}

/// Keeps every export in memory. Handy for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}

/// The desktop clipboard via `arboard`.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
    }
}
