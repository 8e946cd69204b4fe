use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),
    #[error("Malformed stream: {0}")]
    StreamMalformed(String),
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
    /// For translation backends to signal a missing API or language pair.
    /// The gate never raises this itself; it reports unsupported cases as
    /// `TranslationOutcome` values.
    #[error("Translation unsupported: {0}")]
    TranslationUnsupported(String),
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;
