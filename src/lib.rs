use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

pub mod assembler;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod generation;
pub mod labels;
mod messages;
pub mod prompt;
pub mod render;
pub mod session;
pub mod target;
pub mod view;

pub use assembler::assemble;
pub use clipboard::{Clipboard, ClipboardError, FileClipboard, MemoryClipboard, StdoutClipboard};
pub use config::{ClipboardConfig, Config};
pub use generation::{parse_payload, GenerationEvent, PromptMode};
pub use labels::{LabelKey, Labels, Language};
pub use prompt::{CompactPrompt, EditError, PromptField, PromptModel, PromptStructure};
pub use session::{Session, SessionState};
pub use target::TargetAi;

// ──────────────────────────────────────────────────────────────
// Application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load .env file if it exists
    dotenv().ok();

    // Logs go to stderr; stdout carries prompts.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    cli::execute(cli, config).await
}
