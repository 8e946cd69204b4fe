use serde::{Deserialize, Serialize};

/// Availability vocabulary shared by generation capabilities and
/// translation language pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Readily,
    AfterDownload,
    No,
}

impl Availability {
    pub fn usable(&self) -> bool {
        !matches!(self, Availability::No)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Summarizer,
    Writer,
}

impl CapabilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Summarizer => "summarizer",
            CapabilityKind::Writer => "writer",
        }
    }
}
