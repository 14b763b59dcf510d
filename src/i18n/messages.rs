//! Message catalogs: source text to localized text, one catalog per locale.
//!
//! Catalogs are YAML documents keyed by the English source string:
//!
//! ```yaml
//! locale: es
//! messages:
//!   "To Do": "Por hacer"
//! plurals:
//!   "{n} tasks":
//!     one: "{n} tarea"
//!     other: "{n} tareas"
//! ```
//!
//! The five shipped catalogs are embedded in the binary. A directory of
//! `<locale>.yml` files can be layered on top through configuration.

use super::locale::Locale;
use super::plural::PluralForms;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.yml")),
    ("es", include_str!("../../locales/es.yml")),
    ("fr", include_str!("../../locales/fr.yml")),
    ("ja", include_str!("../../locales/ja.yml")),
    ("zh", include_str!("../../locales/zh.yml")),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub locale: Option<Locale>,

    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Keyed by the source `other` form.
    #[serde(default)]
    pub plurals: BTreeMap<String, PluralForms>,
}

impl MessageCatalog {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn message(&self, source: &str) -> Option<&str> {
        self.messages.get(source).map(String::as_str)
    }

    pub fn plural(&self, source_other: &str) -> Option<&PluralForms> {
        self.plurals.get(source_other)
    }

    /// Entries from `other` win over existing ones.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
        self.plurals.extend(other.plurals);
    }

    pub fn len(&self) -> usize {
        self.messages.len() + self.plurals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All loaded catalogs, keyed by normalized locale tag.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: HashMap<String, Arc<MessageCatalog>>,
}

impl Translations {
    /// The catalogs compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalogs = HashMap::new();
        for (tag, content) in EMBEDDED {
            let catalog = MessageCatalog::from_yaml(content)?;
            catalogs.insert((*tag).to_string(), Arc::new(catalog));
        }
        Ok(Self { catalogs })
    }

    /// Embedded catalogs with any `<locale>.yml` files from `dir` merged on top.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let mut translations = Self::embedded()?;
        let Some(dir) = dir else {
            return Ok(translations);
        };

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_yaml = path
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml");
            if !is_yaml {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let locale = match Locale::parse(stem) {
                Ok(locale) => locale,
                Err(_) => {
                    warn!(path = %path.display(), "Skipping catalog with invalid locale name");
                    continue;
                }
            };

            let content = std::fs::read_to_string(&path)?;
            let overlay = MessageCatalog::from_yaml(&content)?;
            debug!(locale = %locale, entries = overlay.len(), "Loaded catalog overlay");
            translations.insert(&locale, overlay);
        }

        Ok(translations)
    }

    pub fn insert(&mut self, locale: &Locale, catalog: MessageCatalog) {
        let slot = self
            .catalogs
            .entry(locale.as_str().to_string())
            .or_insert_with(|| Arc::new(MessageCatalog::default()));
        Arc::make_mut(slot).merge(catalog);
    }

    /// Exact tag first, then the bare language (`fr-CA` falls back to `fr`).
    pub fn catalog_for(&self, locale: &Locale) -> Result<Arc<MessageCatalog>> {
        self.catalogs
            .get(locale.as_str())
            .or_else(|| self.catalogs.get(locale.language()))
            .cloned()
            .ok_or_else(|| BoardError::Config(format!("No message catalog for locale {}", locale)))
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.catalog_for(locale).is_ok()
    }
}
