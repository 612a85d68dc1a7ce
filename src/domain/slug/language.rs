// src/domain/slug/language.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Coarse script hint for a piece of text. Informational only: slug
/// generation never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Bangla,
    Hindi,
    Chinese,
    Japanese,
    Korean,
    Cyrillic,
    Latin,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::Bangla => "bangla",
            Language::Hindi => "hindi",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Cyrillic => "cyrillic",
            Language::Latin => "latin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked in order; the first script with any matching character wins.
const SCRIPT_RANGES: [(Language, RangeInclusive<char>); 7] = [
    (Language::Arabic, '\u{0600}'..='\u{06FF}'),
    (Language::Bangla, '\u{0980}'..='\u{09FF}'),
    (Language::Hindi, '\u{0900}'..='\u{097F}'),
    (Language::Chinese, '\u{4E00}'..='\u{9FFF}'),
    (Language::Japanese, '\u{3040}'..='\u{309F}'),
    (Language::Korean, '\u{AC00}'..='\u{D7AF}'),
    (Language::Cyrillic, '\u{0400}'..='\u{04FF}'),
];

pub fn detect_language(text: &str) -> Language {
    SCRIPT_RANGES
        .iter()
        .find(|(_, range)| text.chars().any(|c| range.contains(&c)))
        .map(|(language, _)| *language)
        .unwrap_or(Language::Latin)
}

pub fn has_non_latin_characters(text: &str) -> bool {
    !text.is_ascii()
}
