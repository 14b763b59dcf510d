use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Language the source strings in this crate are written in.
pub const SOURCE_LANGUAGE: &str = "en";

/// A normalized language tag such as `en`, `fr-CA` or `zh-Hant-TW`.
///
/// The language subtag is lowercased, a four-letter script subtag is
/// title-cased and a two-letter region subtag is uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        let mut parts = tag.split(['-', '_']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(BoardError::InvalidLocale(tag.to_string()));
        }
        let mut normalized = language.to_ascii_lowercase();

        for part in parts {
            if part.is_empty() || part.len() > 8 || !part.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(BoardError::InvalidLocale(tag.to_string()));
            }
            normalized.push('-');
            match part.len() {
                2 => normalized.push_str(&part.to_ascii_uppercase()),
                4 => {
                    let mut chars = part.chars();
                    if let Some(first) = chars.next() {
                        normalized.push(first.to_ascii_uppercase());
                    }
                    normalized.push_str(&chars.as_str().to_ascii_lowercase());
                }
                _ => normalized.push_str(&part.to_ascii_lowercase()),
            }
        }

        Ok(Locale(normalized))
    }

    /// The source language as a locale.
    pub fn source() -> Self {
        Locale(SOURCE_LANGUAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`fr` for `fr-CA`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Name of the language in that language, for the locale switcher.
    pub fn native_name(&self) -> &str {
        match self.language() {
            "en" => "English",
            "es" => "Español",
            "fr" => "Français",
            "ja" => "日本語",
            "zh" => "中文",
            "de" => "Deutsch",
            "ru" => "Русский",
            "pl" => "Polski",
            "ar" => "العربية",
            _ => self.as_str(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}
