use async_trait::async_trait;
use futures::StreamExt;
use noteease::{
    Availability, CapabilityFactory, CapabilityHandle, ChunkStream, GenerationOptions,
    GenerationRequest, Language, LanguagePair, NoteClient, NoteConfig, Result, SummarizerConfig,
    SummaryKind, TranslationProvider, Translator,
};
use std::sync::Arc;

// Scripted in-memory provider standing in for a real capability backend.
// It "summarizes" by streaming the first sentence of the input word by word.
struct ScriptedFactory;

#[async_trait]
impl CapabilityFactory for ScriptedFactory {
    async fn availability(&self) -> Result<Availability> {
        Ok(Availability::Readily)
    }

    async fn create(&self, _options: &GenerationOptions) -> Result<Box<dyn CapabilityHandle>> {
        Ok(Box::new(ScriptedHandle))
    }
}

struct ScriptedHandle;

impl ScriptedHandle {
    fn first_sentence(input: &str) -> String {
        input
            .split_inclusive(['.', '!', '?'])
            .next()
            .unwrap_or(input)
            .trim()
            .to_string()
    }
}

#[async_trait]
impl CapabilityHandle for ScriptedHandle {
    async fn generate_streaming(
        &self,
        input: &str,
        _options: &GenerationOptions,
    ) -> Result<ChunkStream> {
        let sentence = Self::first_sentence(input);
        let chunks: Vec<Result<String>> = sentence
            .split_inclusive(' ')
            .map(|word| Ok(word.to_string()))
            .collect();
        Ok(Box::pin(futures::stream::iter(chunks)))
    }

    async fn generate(&self, input: &str, _options: &GenerationOptions) -> Result<String> {
        Ok(Self::first_sentence(input))
    }
}

struct ScriptedTranslation;

#[async_trait]
impl TranslationProvider for ScriptedTranslation {
    async fn can_translate(&self, pair: LanguagePair) -> Result<Availability> {
        match pair.target {
            Language::Es => Ok(Availability::Readily),
            _ => Ok(Availability::No),
        }
    }

    async fn create_translator(&self, pair: LanguagePair) -> Result<Box<dyn Translator>> {
        Ok(Box::new(ScriptedTranslator { pair }))
    }
}

struct ScriptedTranslator {
    pair: LanguagePair,
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(format!("[{}] {}", self.pair.target, text))
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("no .env file found"),
    }
    noteease::logger::init_with_config(noteease::logger::LoggerConfig::development())?;

    let config = NoteConfig::from_env()
        .with_summarizer(SummarizerConfig::new().with_kind(SummaryKind::TlDr));

    let client = NoteClient::new(
        &ScriptedFactory,
        &ScriptedFactory,
        Some(Arc::new(ScriptedTranslation)),
        config,
    )
    .await?;

    let input = "Rust makes streaming orchestration pleasant. There is more \
                 text here that the scripted summarizer will ignore.";

    let mut stream = client.summarize(GenerationRequest::new(input));
    while let Some(snapshot) = stream.next().await {
        println!("partial: {:?} (done: {})", snapshot.text, snapshot.done);
    }

    let (summary, outcome) = client
        .summarize_translated(GenerationRequest::new(input), Some(Language::Es))
        .await;
    println!("summary: {}", summary);
    println!("translated: {:?}", outcome);

    Ok(())
}
