use crate::{
    error::Result,
    models::{Availability, Language, LanguagePair, TranslationOutcome},
    provider::TranslationProvider,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Decides per request whether translation is possible before attempting
/// it. One attempt walks idle -> checking -> translating -> done, or stops
/// at no-op / unsupported; there are no retries.
///
/// Attempts are tagged with a monotonically increasing token. A completion
/// whose token is no longer current resolves to
/// [`TranslationOutcome::Superseded`] so it cannot overwrite the result of
/// a newer attempt.
pub struct TranslationGate {
    provider: Option<Arc<dyn TranslationProvider>>,
    attempts: AtomicU64,
}

impl TranslationGate {
    pub fn new(provider: Option<Arc<dyn TranslationProvider>>) -> Self {
        Self {
            provider,
            attempts: AtomicU64::new(0),
        }
    }

    pub async fn translate(&self, text: &str, target: Language) -> TranslationOutcome {
        // Source text is always English; nothing to do for en or empty input.
        if target == Language::SOURCE || text.is_empty() {
            return TranslationOutcome::NoOp;
        }

        let token = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.attempt(text, target).await;

        if self.attempts.load(Ordering::SeqCst) != token {
            log::debug!("translation attempt {} superseded, discarding", token);
            return TranslationOutcome::Superseded;
        }
        outcome
    }

    async fn attempt(&self, text: &str, target: Language) -> TranslationOutcome {
        let provider = match &self.provider {
            Some(provider) => provider.clone(),
            None => {
                log::warn!("no translation provider configured");
                return TranslationOutcome::UnsupportedApi;
            }
        };

        let pair = LanguagePair::to(target);
        match self.run(provider, pair, text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("translation for {} failed: {}", pair, e);
                TranslationOutcome::UnsupportedApi
            }
        }
    }

    async fn run(
        &self,
        provider: Arc<dyn TranslationProvider>,
        pair: LanguagePair,
        text: &str,
    ) -> Result<TranslationOutcome> {
        match provider.can_translate(pair).await? {
            Availability::Readily | Availability::AfterDownload => {}
            Availability::No => {
                log::info!("language pair {} not supported", pair);
                return Ok(TranslationOutcome::UnsupportedPair);
            }
        }

        let translator = provider.create_translator(pair).await?;
        let translated = translator.translate(text).await?;
        log::debug!("translated {} bytes for {}", translated.len(), pair);
        Ok(TranslationOutcome::Translated(translated))
    }
}
