use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::generation::{load_payload, ParseModeError, PromptMode};
use crate::labels::{LabelKey, Labels};
use crate::messages::{
    field_updated, target_selected, unknown_command, COMPACT_UPDATED, FIELDS_HINT, HELP_TEXT,
};
use crate::prompt::{ParseFieldError, PromptField};
use crate::render::format_view;
use crate::session::Session;
use crate::target::{ParseTargetError, TargetAi};
use crate::view::build_view;

/// One line typed into the terminal editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Help,
    Show,
    Status,
    Targets,
    Target(TargetAi),
    Set(PromptField, String),
    Text(String),
    Load(PathBuf, Option<PromptMode>),
    Copy,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{}", unknown_command(.0))]
    Unknown(String),
    #[error("'{0}' needs an argument. Type 'help' for usage.")]
    MissingArgument(&'static str),
    #[error("{0}")]
    Target(#[from] ParseTargetError),
    #[error("{}. {}", .0, FIELDS_HINT)]
    Field(#[from] ParseFieldError),
    #[error("{0}")]
    Mode(#[from] ParseModeError),
}

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Silent,
    Quit,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim_start()),
        None => (input, ""),
    }
}

impl EditorCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = split_word(line);
        let command = match word.to_lowercase().as_str() {
            "" => EditorCommand::Empty,
            "help" | "?" => EditorCommand::Help,
            "show" => EditorCommand::Show,
            "status" => EditorCommand::Status,
            "targets" => EditorCommand::Targets,
            "target" => {
                if rest.trim().is_empty() {
                    return Err(CommandError::MissingArgument("target"));
                }
                EditorCommand::Target(rest.parse::<TargetAi>()?)
            }
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("set"));
                }
                EditorCommand::Set(field.parse::<PromptField>()?, value.to_string())
            }
            "text" => EditorCommand::Text(rest.to_string()),
            "load" => {
                let (path, mode) = split_word(rest);
                if path.is_empty() {
                    return Err(CommandError::MissingArgument("load"));
                }
                let mode = match mode.trim() {
                    "" => None,
                    m => Some(m.parse::<PromptMode>()?),
                };
                EditorCommand::Load(PathBuf::from(path), mode)
            }
            "copy" => EditorCommand::Copy,
            "quit" | "exit" => EditorCommand::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }

    pub async fn dispatch<C>(
        self,
        session: &mut Session,
        labels: &Labels,
        clipboard: &mut C,
    ) -> Result<Outcome>
    where
        C: Clipboard + ?Sized,
    {
        debug!(command = ?self, "Dispatching editor command");
        let outcome = match self {
            EditorCommand::Empty => Outcome::Silent,
            EditorCommand::Help => Outcome::Print(HELP_TEXT.to_string()),
            EditorCommand::Show => Outcome::Print(format_view(&build_view(session, labels))),
            EditorCommand::Status => Outcome::Print(status_text(session, labels)),
            EditorCommand::Targets => Outcome::Print(
                TargetAi::ALL
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            EditorCommand::Target(target) => {
                session.set_target(target);
                Outcome::Print(target_selected(target.display_name()))
            }
            EditorCommand::Set(field, value) => match session.set_field(field, value) {
                Ok(()) => Outcome::Print(field_updated(field.key())),
                Err(err) => Outcome::Print(err.to_string()),
            },
            EditorCommand::Text(value) => match session.set_compact_text(value) {
                Ok(()) => Outcome::Print(COMPACT_UPDATED.to_string()),
                Err(err) => Outcome::Print(err.to_string()),
            },
            EditorCommand::Load(path, mode) => {
                if let Some(mode) = mode {
                    session.begin_generation(mode);
                }
                match load_payload(&path).await {
                    Ok(model) => {
                        session.adopt(model);
                        Outcome::Print(format_view(&build_view(session, labels)))
                    }
                    Err(err) => {
                        session.fail(format!("{}: {err:#}", labels.t(LabelKey::ErrorPrefix)));
                        Outcome::Print(format_view(&build_view(session, labels)))
                    }
                }
            }
            EditorCommand::Copy => {
                if session.copy(clipboard).await {
                    Outcome::Print(format!("✅ {}", labels.t(LabelKey::Copied)))
                } else {
                    Outcome::Silent
                }
            }
            EditorCommand::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

fn status_text(session: &Session, labels: &Labels) -> String {
    let copied = if session.is_copied() {
        labels.t(LabelKey::Copied)
    } else {
        "-"
    };
    format!(
        "{}: {}\nCopied: {}\n---\n{}",
        labels.t(LabelKey::TargetAi),
        session.target(),
        copied,
        session.assemble()
    )
}
