pub mod generate;
pub mod translate;

pub use generate::{generate, SnapshotStream, GENERATION_ERROR_PLACEHOLDER};
pub use translate::TranslationGate;

use crate::{
    config::NoteConfig,
    error::{NoteError, Result},
    models::{CapabilityKind, GenerationRequest, Language, TranslationOutcome},
    provider::{CapabilityFactory, CapabilityHandle, TranslationProvider},
};
use futures::StreamExt;
use std::sync::Arc;

/// Front door of the crate. Capability handles are created once from the
/// injected providers at construction and owned for the client's lifetime;
/// nothing is read from ambient scope afterwards.
pub struct NoteClient {
    summarizer: Arc<dyn CapabilityHandle>,
    writer: Arc<dyn CapabilityHandle>,
    translation: TranslationGate,
    config: NoteConfig,
}

impl NoteClient {
    pub async fn new(
        summarizer: &dyn CapabilityFactory,
        writer: &dyn CapabilityFactory,
        translation: Option<Arc<dyn TranslationProvider>>,
        config: NoteConfig,
    ) -> Result<Self> {
        let summarizer =
            Self::init_handle(summarizer, CapabilityKind::Summarizer, &config).await?;
        let writer = Self::init_handle(writer, CapabilityKind::Writer, &config).await?;

        Ok(Self {
            summarizer,
            writer,
            translation: TranslationGate::new(translation),
            config,
        })
    }

    async fn init_handle(
        factory: &dyn CapabilityFactory,
        kind: CapabilityKind,
        config: &NoteConfig,
    ) -> Result<Arc<dyn CapabilityHandle>> {
        let availability = factory.availability().await?;
        if !availability.usable() {
            return Err(NoteError::CapabilityUnavailable(kind.as_str().to_string()));
        }

        let options = match kind {
            CapabilityKind::Summarizer => config.summarizer.options(),
            CapabilityKind::Writer => config.writer.options(),
        };
        let handle = factory.create(&options).await?;
        log::info!("{} capability initialized", kind.as_str());
        Ok(Arc::from(handle))
    }

    /// Streaming summarization of the request input. Options left unset on
    /// the request are filled from the configured summarizer defaults.
    pub fn summarize(&self, request: GenerationRequest) -> SnapshotStream {
        let request = self.config.summarizer.apply(request);
        generate(self.summarizer.clone(), request)
    }

    /// Streaming generative writing from the request input as prompt.
    pub fn write(&self, request: GenerationRequest) -> SnapshotStream {
        let request = self.config.writer.apply(request);
        generate(self.writer.clone(), request)
    }

    pub async fn summarize_to_end(&self, request: GenerationRequest) -> String {
        Self::drain(self.summarize(request)).await
    }

    pub async fn write_to_end(&self, request: GenerationRequest) -> String {
        Self::drain(self.write(request)).await
    }

    /// Summarizes to completion, then translates the finished result.
    /// Translation never sees a mid-stream snapshot. With no explicit
    /// target the configured target language applies; absent both, the
    /// translation is a no-op.
    pub async fn summarize_translated(
        &self,
        request: GenerationRequest,
        target: Option<Language>,
    ) -> (String, TranslationOutcome) {
        let summary = self.summarize_to_end(request).await;
        let outcome = self
            .translation
            .translate(&summary, self.resolve_target(target))
            .await;
        (summary, outcome)
    }

    pub async fn write_translated(
        &self,
        request: GenerationRequest,
        target: Option<Language>,
    ) -> (String, TranslationOutcome) {
        let text = self.write_to_end(request).await;
        let outcome = self
            .translation
            .translate(&text, self.resolve_target(target))
            .await;
        (text, outcome)
    }

    fn resolve_target(&self, target: Option<Language>) -> Language {
        target
            .or(self.config.target_language)
            .unwrap_or(Language::SOURCE)
    }

    pub async fn translate(&self, text: &str, target: Language) -> TranslationOutcome {
        self.translation.translate(text, target).await
    }

    pub fn config(&self) -> &NoteConfig {
        &self.config
    }

    async fn drain(mut stream: SnapshotStream) -> String {
        let mut last = String::new();
        while let Some(snapshot) = stream.next().await {
            last = snapshot.text;
        }
        last
    }
}
