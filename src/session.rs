//! Editing session: the active prompt, the selected target and the
//! transient "copied" confirmation.

pub mod copied;

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::assembler::assemble;
use crate::clipboard::Clipboard;
use crate::generation::{GenerationEvent, PromptMode};
use crate::prompt::{EditError, PromptField, PromptModel};
use crate::target::TargetAi;

pub use copied::{CopiedFlag, DEFAULT_COPIED_RESET};

/// What the generation backend last told the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(PromptModel),
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    target: TargetAi,
    mode: Option<PromptMode>,
    copied: CopiedFlag,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_window(window: Duration) -> Self {
        Self {
            copied: CopiedFlag::new(window),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: TargetAi) -> Self {
        self.target = target;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn model(&self) -> Option<&PromptModel> {
        match &self.state {
            SessionState::Ready(model) => Some(model),
            _ => None,
        }
    }

    pub fn target(&self) -> TargetAi {
        self.target
    }

    pub fn mode(&self) -> Option<PromptMode> {
        self.mode
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_on()
    }

    /// A generation request started; the current prompt is discarded.
    pub fn begin_generation(&mut self, mode: PromptMode) {
        debug!(%mode, "Generation started");
        self.state = SessionState::Loading;
        self.mode = Some(mode);
        self.copied.clear();
    }

    /// Replace the active prompt, discarding every earlier edit.
    ///
    /// An empty compact result counts as no prompt and leaves the session idle.
    pub fn adopt(&mut self, model: PromptModel) {
        if let PromptModel::Compact(compact) = &model {
            if compact.original().is_empty() {
                debug!("Empty compact prompt, nothing to adopt");
                self.state = SessionState::Idle;
                self.mode = None;
                self.copied.clear();
                return;
            }
        }
        if !matches!(self.state, SessionState::Loading) || self.mode.is_none() {
            self.mode = Some(PromptMode::for_model(&model));
        }
        debug!(compact = model.is_compact(), "Adopting prompt");
        self.state = SessionState::Ready(model);
        self.copied.clear();
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "Generation failed");
        self.state = SessionState::Failed(message);
        self.copied.clear();
    }

    pub fn apply(&mut self, event: GenerationEvent) {
        match event {
            GenerationEvent::Started(mode) => self.begin_generation(mode),
            GenerationEvent::Structured(structure) => {
                self.adopt(PromptModel::Structured(structure))
            }
            GenerationEvent::Compact(text) => self.adopt(PromptModel::compact(text)),
            GenerationEvent::Failed(message) => self.fail(message),
        }
    }

    pub fn set_field(
        &mut self,
        field: PromptField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let SessionState::Ready(model) = &mut self.state else {
            return Err(EditError::NoActivePrompt);
        };
        model.set_field(field, value)?;
        self.copied.clear();
        Ok(())
    }

    pub fn set_compact_text(&mut self, value: impl Into<String>) -> Result<(), EditError> {
        let SessionState::Ready(model) = &mut self.state else {
            return Err(EditError::NoActivePrompt);
        };
        model.set_compact_text(value)?;
        self.copied.clear();
        Ok(())
    }

    pub fn set_target(&mut self, target: TargetAi) {
        if self.target == target {
            return;
        }
        debug!(from = %self.target, to = %target, "Target changed");
        self.target = target;
        self.copied.clear();
    }

    /// Export string for the current prompt and target; empty without a prompt.
    pub fn assemble(&self) -> String {
        self.model()
            .map(|model| assemble(model, self.target))
            .unwrap_or_default()
    }

    /// Write the assembled prompt to `clipboard` and arm the confirmation.
    ///
    /// Returns whether the write succeeded. A failed write is logged and
    /// leaves the confirmation off. Must be polled within a tokio runtime,
    /// since arming the confirmation spawns the reset task.
    #[instrument(level = "debug", skip_all, fields(target = %self.target))]
    pub async fn copy<C>(&mut self, clipboard: &mut C) -> bool
    where
        C: Clipboard + ?Sized,
    {
        if self.model().is_none() {
            debug!("Nothing to copy");
            return false;
        }
        let text = self.assemble();

        match clipboard.write_text(&text).await {
            Ok(()) => {
                self.copied.arm();
                info!(len = text.len(), "Prompt copied");
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to copy prompt");
                false
            }
        }
    }
}
