//! Locale set and bilingual text.
//!
//! The catalog is displayed in exactly two locales. Persian is the primary
//! (right-to-left) locale and English the secondary one. Search comparisons
//! fold text with the rule of the locale the text belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Persian (primary).
    #[default]
    Fa,
    /// English (secondary).
    En,
}

impl Locale {
    /// Both locales, primary first.
    pub const ALL: [Locale; 2] = [Self::Fa, Self::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::En => "en",
        }
    }

    /// Whether text in this locale is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Fa)
    }

    /// Fold `text` for case-insensitive comparison under this locale.
    ///
    /// English uses Unicode lowercasing. Persian lowercases too (embedded
    /// Latin is common in brand names) and maps the Arabic yeh and kaf code
    /// points onto their Persian forms, which render identically.
    pub fn fold(&self, text: &str) -> String {
        match self {
            Self::En => text.to_lowercase(),
            Self::Fa => text
                .chars()
                .flat_map(char::to_lowercase)
                .map(unify_persian)
                .collect(),
        }
    }
}

fn unify_persian(c: char) -> char {
    match c {
        '\u{064A}' | '\u{0649}' => '\u{06CC}',
        '\u{0643}' => '\u{06A9}',
        other => other,
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" => Ok(Self::Fa),
            "en" => Ok(Self::En),
            _ => Err(ModelError::UnknownLocale(s.to_string())),
        }
    }
}

/// Display text in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub fa: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(fa: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fa: fa.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fa => &self.fa,
            Locale::En => &self.en,
        }
    }

    /// Iterate `(locale, text)` pairs, primary first.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &str)> {
        Locale::ALL.into_iter().map(|locale| (locale, self.get(locale)))
    }

    /// Locales whose text is blank after trimming.
    pub fn blank_locales(&self) -> Vec<Locale> {
        self.iter()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(locale, _)| locale)
            .collect()
    }
}
