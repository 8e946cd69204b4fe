pub mod config;
pub mod error;
pub mod ingest;
pub mod logger;
pub mod models;
pub mod provider;
pub mod session;

pub use config::{NoteConfig, SummarizerConfig, WriterConfig};
pub use error::{NoteError, Result};
pub use models::*;
pub use provider::{
    CapabilityFactory, CapabilityHandle, ChunkStream, TranslationProvider, Translator,
};
pub use session::{
    generate, NoteClient, SnapshotStream, TranslationGate, GENERATION_ERROR_PLACEHOLDER,
};
