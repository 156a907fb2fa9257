//! Display strings for the prompt editor.
//!
//! Keep every user-facing label here so the editor logic never depends on
//! the wording, only on [`LabelKey`].

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Pl,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}'")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "pl" | "polish" | "polski" => Ok(Language::Pl),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    GeneratedPromptTitle,
    LoadingTitle,
    LoadingSubtitle,
    PlaceholderTitle,
    PlaceholderSubtitle,
    TargetAi,
    CopyButton,
    Copied,

    Subject,
    Scene,
    Mood,
    Style,
    Lighting,
    Camera,
    Details,
    NegativePrompt,

    GeneratingTitle,
    ProfessionalPromptTitle,
    VideoPromptTitle,
    StructuredPromptTitle,
    CompactPromptTitle,

    ErrorPrefix,
    ErrorUnknown,
}

impl LabelKey {
    /// Translation table key.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelKey::GeneratedPromptTitle => "generatedPromptTitle",
            LabelKey::LoadingTitle => "loadingTitle",
            LabelKey::LoadingSubtitle => "loadingSubtitle",
            LabelKey::PlaceholderTitle => "placeholderTitle",
            LabelKey::PlaceholderSubtitle => "placeholderSubtitle",
            LabelKey::TargetAi => "targetAI",
            LabelKey::CopyButton => "copyButton",
            LabelKey::Copied => "copied",
            LabelKey::Subject => "subject",
            LabelKey::Scene => "scene",
            LabelKey::Mood => "mood",
            LabelKey::Style => "style",
            LabelKey::Lighting => "lighting",
            LabelKey::Camera => "camera",
            LabelKey::Details => "details",
            LabelKey::NegativePrompt => "negativePrompt",
            LabelKey::GeneratingTitle => "generatingTitle",
            LabelKey::ProfessionalPromptTitle => "professionalPromptTitle",
            LabelKey::VideoPromptTitle => "videoPromptTitle",
            LabelKey::StructuredPromptTitle => "structuredPromptTitle",
            LabelKey::CompactPromptTitle => "compactPromptTitle",
            LabelKey::ErrorPrefix => "errorPrefix",
            LabelKey::ErrorUnknown => "errorUnknown",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label lookup for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Labels {
    language: Language,
}

impl Labels {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: LabelKey) -> &'static str {
        match self.language {
            Language::En => english(key),
            Language::Pl => polish(key),
        }
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::GeneratedPromptTitle => "Generated Prompt",
        LabelKey::LoadingTitle => "Architecting Your Vision...",
        LabelKey::LoadingSubtitle => "The AI is analyzing your input.",
        LabelKey::PlaceholderTitle => "Ready to Create?",
        LabelKey::PlaceholderSubtitle => "Generate a prompt from text or an image.",
        LabelKey::TargetAi => "Target AI Model",
        LabelKey::CopyButton => "Copy Final Prompt",
        LabelKey::Copied => "Copied!",
        LabelKey::Subject => "Subject",
        LabelKey::Scene => "Scene / Context",
        LabelKey::Mood => "Emotion / Mood",
        LabelKey::Style => "Visual Style",
        LabelKey::Lighting => "Lighting",
        LabelKey::Camera => "Perspective / Camera",
        LabelKey::Details => "Detail / Quality",
        LabelKey::NegativePrompt => "Negative Prompt",
        LabelKey::GeneratingTitle => "Generating...",
        LabelKey::ProfessionalPromptTitle => "Professional Prompt",
        LabelKey::VideoPromptTitle => "Video Prompt",
        LabelKey::StructuredPromptTitle => "Structured Prompt",
        LabelKey::CompactPromptTitle => "Compact Prompt",
        LabelKey::ErrorPrefix => "An error occurred",
        LabelKey::ErrorUnknown => "An unknown error occurred.",
    }
}

fn polish(key: LabelKey) -> &'static str {
    match key {
        LabelKey::GeneratedPromptTitle => "Wygenerowany Prompt",
        LabelKey::LoadingTitle => "Architektura Twojej wizji...",
        LabelKey::LoadingSubtitle => "AI analizuje Twoje dane wejściowe.",
        LabelKey::PlaceholderTitle => "Gotowy do tworzenia?",
        LabelKey::PlaceholderSubtitle => "Wygeneruj prompt z tekstu lub obrazu.",
        LabelKey::TargetAi => "Docelowy model AI",
        LabelKey::CopyButton => "Kopiuj Końcowy Prompt",
        LabelKey::Copied => "Skopiowano!",
        LabelKey::Subject => "Przedmiot / Subiekt",
        LabelKey::Scene => "Scena / Kontekst",
        LabelKey::Mood => "Emocje / Nastrój",
        LabelKey::Style => "Styl Wizualny",
        LabelKey::Lighting => "Oświetlenie",
        LabelKey::Camera => "Perspektywa / Kamera",
        LabelKey::Details => "Szczegółowość / Jakość",
        LabelKey::NegativePrompt => "Prompt Negatywny",
        LabelKey::GeneratingTitle => "Generowanie...",
        LabelKey::ProfessionalPromptTitle => "Profesjonalny Prompt",
        LabelKey::VideoPromptTitle => "Prompt Wideo",
        LabelKey::StructuredPromptTitle => "Prompt Ustrukturyzowany",
        LabelKey::CompactPromptTitle => "Prompt Kompaktowy",
        LabelKey::ErrorPrefix => "Wystąpił błąd",
        LabelKey::ErrorUnknown => "Wystąpił nieznany błąd.",
    }
}
