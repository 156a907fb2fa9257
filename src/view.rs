//! What the output panel shows for a session.

use crate::labels::{LabelKey, Labels};
use crate::prompt::{PromptField, PromptModel};
use crate::session::{Session, SessionState};
use crate::target::TargetAi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: PromptField,
    pub label: &'static str,
    pub value: String,
    pub rows: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading {
        output_title: &'static str,
        title: &'static str,
        subtitle: &'static str,
    },
    Error(String),
    Compact {
        label: String,
        text: String,
    },
    Structured(Vec<FieldView>),
    Placeholder {
        title: &'static str,
        subtitle: &'static str,
    },
}

/// Target selector and copy action, shown only while a prompt is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportControls {
    pub target_label: &'static str,
    pub choices: [TargetAi; 3],
    pub selected: TargetAi,
    pub button_label: &'static str,
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub heading: &'static str,
    pub body: Body,
    pub export: Option<ExportControls>,
}

pub fn build_view(session: &Session, labels: &Labels) -> View {
    let body = match session.state() {
        SessionState::Loading => Body::Loading {
            output_title: labels.t(LabelKey::GeneratingTitle),
            title: labels.t(LabelKey::LoadingTitle),
            subtitle: labels.t(LabelKey::LoadingSubtitle),
        },
        SessionState::Failed(message) if message.trim().is_empty() => {
            Body::Error(labels.t(LabelKey::ErrorUnknown).to_string())
        }
        SessionState::Failed(message) => Body::Error(message.clone()),
        SessionState::Ready(PromptModel::Compact(compact)) => Body::Compact {
            label: session
                .mode()
                .map(|m| labels.t(m.title_key()))
                .unwrap_or_else(|| labels.t(LabelKey::CompactPromptTitle))
                .to_string(),
            text: compact.working().to_string(),
        },
        SessionState::Ready(PromptModel::Structured(structure)) => Body::Structured(
            structure
                .fields()
                .map(|(field, value)| FieldView {
                    field,
                    label: labels.t(field.label_key()),
                    value: value.to_string(),
                    rows: field.editor_rows(),
                })
                .collect(),
        ),
        SessionState::Idle => Body::Placeholder {
            title: labels.t(LabelKey::PlaceholderTitle),
            subtitle: labels.t(LabelKey::PlaceholderSubtitle),
        },
    };

    let export = session.model().map(|_| {
        let copied = session.is_copied();
        ExportControls {
            target_label: labels.t(LabelKey::TargetAi),
            choices: TargetAi::ALL,
            selected: session.target(),
            button_label: if copied {
                labels.t(LabelKey::Copied)
            } else {
                labels.t(LabelKey::CopyButton)
            },
            copied,
        }
    });

    View {
        heading: labels.t(LabelKey::GeneratedPromptTitle),
        body,
        export,
    }
}
