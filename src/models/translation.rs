use crate::error::NoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the translation gate will offer. The source side of every
/// pair is fixed to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Zh,
    Ja,
    Pt,
    Ru,
    Tr,
    Hi,
    Vi,
    Bn,
}

impl Language {
    pub const SOURCE: Language = Language::En;

    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Zh,
        Language::Ja,
        Language::Pt,
        Language::Ru,
        Language::Tr,
        Language::Hi,
        Language::Vi,
        Language::Bn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Hi => "hi",
            Language::Vi => "vi",
            Language::Bn => "bn",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Zh => "Chinese (Simplified)",
            Language::Ja => "Japanese",
            Language::Pt => "Portuguese",
            Language::Ru => "Russian",
            Language::Tr => "Turkish",
            Language::Hi => "Hindi",
            Language::Vi => "Vietnamese",
            Language::Bn => "Bengali",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .find(|lang| lang.code() == s)
            .copied()
            .ok_or_else(|| NoteError::Config(format!("unsupported language code: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    /// Pair from the fixed source language to `target`.
    pub fn to(target: Language) -> Self {
        Self {
            source: Language::SOURCE,
            target,
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// Terminal outcome of one translation attempt. `Superseded` marks a
/// completion that lost to a newer attempt and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationOutcome {
    NoOp,
    UnsupportedApi,
    UnsupportedPair,
    Translated(String),
    Superseded,
}

impl TranslationOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Translated(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!(Language::Zh.name(), "Chinese (Simplified)");
        assert!("de".parse::<Language>().is_err());
        assert_eq!(serde_json::to_string(&Language::Bn).unwrap(), "\"bn\"");
    }

    #[test]
    fn test_pair_display() {
        assert_eq!(LanguagePair::to(Language::Ja).to_string(), "en->ja");
    }
}
