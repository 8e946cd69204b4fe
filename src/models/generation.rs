use crate::error::NoteError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryKind {
    KeyPoints,
    #[serde(rename = "tl;dr")]
    TlDr,
    Teaser,
    Headline,
}

impl SummaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::KeyPoints => "key-points",
            SummaryKind::TlDr => "tl;dr",
            SummaryKind::Teaser => "teaser",
            SummaryKind::Headline => "headline",
        }
    }
}

impl FromStr for SummaryKind {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key-points" => Ok(SummaryKind::KeyPoints),
            "tl;dr" => Ok(SummaryKind::TlDr),
            "teaser" => Ok(SummaryKind::Teaser),
            "headline" => Ok(SummaryKind::Headline),
            _ => Err(NoteError::Config(format!("unknown summary kind: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteTone {
    Formal,
    Neutral,
    Casual,
}

impl WriteTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteTone::Formal => "formal",
            WriteTone::Neutral => "neutral",
            WriteTone::Casual => "casual",
        }
    }
}

impl FromStr for WriteTone {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(WriteTone::Formal),
            "neutral" => Ok(WriteTone::Neutral),
            "casual" => Ok(WriteTone::Casual),
            _ => Err(NoteError::Config(format!("unknown tone: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLength {
    Short,
    Medium,
    Long,
}

impl OutputLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLength::Short => "short",
            OutputLength::Medium => "medium",
            OutputLength::Long => "long",
        }
    }
}

impl FromStr for OutputLength {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(OutputLength::Short),
            "medium" => Ok(OutputLength::Medium),
            "long" => Ok(OutputLength::Long),
            _ => Err(NoteError::Config(format!("unknown length: {}", s))),
        }
    }
}

/// Recognized options of a generation request. `kind` applies to the
/// summarizer only, `tone` to the writer only; providers ignore fields
/// outside their capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub context: Option<String>,
    pub kind: Option<SummaryKind>,
    pub tone: Option<WriteTone>,
    pub length: Option<OutputLength>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub input: String,
    #[serde(default)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// State of the accumulated result after a merge step. The text grows
/// monotonically until the final snapshot, where `done` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub text: String,
    pub done: bool,
}
