use crate::models::{
    GenerationOptions, GenerationRequest, Language, OutputLength, SummaryKind, WriteTone,
};
use std::env;

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub kind: SummaryKind,
    pub length: OutputLength,
    pub shared_context: Option<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        SummarizerConfig {
            kind: SummaryKind::KeyPoints,
            length: OutputLength::Medium,
            shared_context: None,
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let kind = env::var("NOTEEASE_SUMMARY_KIND")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(SummaryKind::KeyPoints);
        let length = env::var("NOTEEASE_SUMMARY_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(OutputLength::Medium);
        let shared_context = env::var("NOTEEASE_SHARED_CONTEXT").ok();

        SummarizerConfig {
            kind,
            length,
            shared_context,
        }
    }

    pub fn with_kind(mut self, kind: SummaryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_length(mut self, length: OutputLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_shared_context(mut self, context: impl Into<String>) -> Self {
        self.shared_context = Some(context.into());
        self
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            context: self.shared_context.clone(),
            kind: Some(self.kind),
            tone: None,
            length: Some(self.length),
        }
    }

    /// Fill request options left unset by the caller.
    pub fn apply(&self, mut request: GenerationRequest) -> GenerationRequest {
        let options = &mut request.options;
        if options.kind.is_none() {
            options.kind = Some(self.kind);
        }
        if options.length.is_none() {
            options.length = Some(self.length);
        }
        if options.context.is_none() {
            options.context = self.shared_context.clone();
        }
        request
    }
}

#[derive(Debug, Clone)]
pub struct WriterConfig {
    pub tone: WriteTone,
    pub length: OutputLength,
    pub shared_context: Option<String>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            tone: WriteTone::Neutral,
            length: OutputLength::Medium,
            shared_context: None,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let tone = env::var("NOTEEASE_WRITER_TONE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(WriteTone::Neutral);
        let length = env::var("NOTEEASE_WRITER_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(OutputLength::Medium);
        let shared_context = env::var("NOTEEASE_SHARED_CONTEXT").ok();

        WriterConfig {
            tone,
            length,
            shared_context,
        }
    }

    pub fn with_tone(mut self, tone: WriteTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_length(mut self, length: OutputLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_shared_context(mut self, context: impl Into<String>) -> Self {
        self.shared_context = Some(context.into());
        self
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            context: self.shared_context.clone(),
            kind: None,
            tone: Some(self.tone),
            length: Some(self.length),
        }
    }

    pub fn apply(&self, mut request: GenerationRequest) -> GenerationRequest {
        let options = &mut request.options;
        if options.tone.is_none() {
            options.tone = Some(self.tone);
        }
        if options.length.is_none() {
            options.length = Some(self.length);
        }
        if options.context.is_none() {
            options.context = self.shared_context.clone();
        }
        request
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoteConfig {
    pub summarizer: SummarizerConfig,
    pub writer: WriterConfig,
    pub target_language: Option<Language>,
}

impl NoteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let target_language = env::var("NOTEEASE_TARGET_LANGUAGE")
            .ok()
            .and_then(|s| s.parse().ok());

        NoteConfig {
            summarizer: SummarizerConfig::from_env(),
            writer: WriterConfig::from_env(),
            target_language,
        }
    }

    pub fn with_summarizer(mut self, config: SummarizerConfig) -> Self {
        self.summarizer = config;
        self
    }

    pub fn with_writer(mut self, config: WriterConfig) -> Self {
        self.writer = config;
        self
    }

    pub fn with_target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NoteConfig::new();
        assert_eq!(config.summarizer.kind, SummaryKind::KeyPoints);
        assert_eq!(config.writer.tone, WriteTone::Neutral);
        assert!(config.target_language.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = NoteConfig::new()
            .with_summarizer(
                SummarizerConfig::new()
                    .with_kind(SummaryKind::Headline)
                    .with_length(OutputLength::Short)
                    .with_shared_context("meeting notes"),
            )
            .with_target_language(Language::Es);
        assert_eq!(config.summarizer.kind, SummaryKind::Headline);
        assert_eq!(
            config.summarizer.shared_context.as_deref(),
            Some("meeting notes")
        );
        assert_eq!(config.target_language, Some(Language::Es));
    }

    #[test]
    fn test_apply_fills_missing_fields_only() {
        let config = SummarizerConfig::new().with_kind(SummaryKind::Teaser);
        let request = GenerationRequest::new("text").with_options(GenerationOptions {
            length: Some(OutputLength::Long),
            ..Default::default()
        });
        let request = config.apply(request);
        assert_eq!(request.options.kind, Some(SummaryKind::Teaser));
        assert_eq!(request.options.length, Some(OutputLength::Long));
    }
}
