use serde::{Deserialize, Serialize};

/// CLDR cardinal plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Cardinal plural category of an integer count for a language subtag.
///
/// Covers integer operands only. Unknown languages use the English rule.
pub fn plural_category(language: &str, n: i64) -> PluralCategory {
    let n = n.unsigned_abs();
    let mod10 = n % 10;
    let mod100 = n % 100;

    match language {
        "ja" | "zh" | "ko" | "th" | "vi" | "id" => PluralCategory::Other,
        "fr" => match n {
            0 | 1 => PluralCategory::One,
            _ if n % 1_000_000 == 0 => PluralCategory::Many,
            _ => PluralCategory::Other,
        },
        "es" | "it" | "pt" => match n {
            1 => PluralCategory::One,
            _ if n != 0 && n % 1_000_000 == 0 => PluralCategory::Many,
            _ => PluralCategory::Other,
        },
        "ru" | "uk" => {
            if mod10 == 1 && mod100 != 11 {
                PluralCategory::One
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            }
        }
        "pl" => {
            if n == 1 {
                PluralCategory::One
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            }
        }
        "ar" => match n {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            _ if (3..=10).contains(&mod100) => PluralCategory::Few,
            _ if (11..=99).contains(&mod100) => PluralCategory::Many,
            _ => PluralCategory::Other,
        },
        _ => {
            if n == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
    }
}

/// Text variants for each plural category. `other` is mandatory and is
/// used whenever the selected category has no text of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many: Option<String>,
    pub other: String,
}

impl PluralForms {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            ..Self::default()
        }
    }

    pub fn with(mut self, category: PluralCategory, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match category {
            PluralCategory::Zero => self.zero = text,
            PluralCategory::One => self.one = text,
            PluralCategory::Two => self.two = text,
            PluralCategory::Few => self.few = text,
            PluralCategory::Many => self.many = text,
            PluralCategory::Other => self.other = text.unwrap_or_default(),
        }
        self
    }

    pub fn select(&self, category: PluralCategory) -> &str {
        let form = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => None,
        };
        form.unwrap_or(&self.other)
    }
}
