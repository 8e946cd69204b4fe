use crate::{
    error::Result,
    models::{Availability, GenerationOptions, LanguagePair},
};
use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// One generation capability kind (summarizer or writer) as exposed by an
/// external provider: an availability check plus a factory that yields an
/// initialized handle from a configuration record.
#[async_trait]
pub trait CapabilityFactory: Send + Sync {
    async fn availability(&self) -> Result<Availability>;
    async fn create(&self, options: &GenerationOptions) -> Result<Box<dyn CapabilityHandle>>;
}

/// An initialized connection to a specific generation operation. Both calls
/// take the same option record; the streaming call yields string chunks,
/// the non-streaming call the full result at once.
#[async_trait]
pub trait CapabilityHandle: Send + Sync {
    async fn generate_streaming(
        &self,
        input: &str,
        options: &GenerationOptions,
    ) -> Result<ChunkStream>;
    async fn generate(&self, input: &str, options: &GenerationOptions) -> Result<String>;
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn can_translate(&self, pair: LanguagePair) -> Result<Availability>;
    async fn create_translator(&self, pair: LanguagePair) -> Result<Box<dyn Translator>>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}
