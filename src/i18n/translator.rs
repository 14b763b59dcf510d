use super::format::{format_date, format_number};
use super::locale::{Locale, SOURCE_LANGUAGE};
use super::messages::{MessageCatalog, Translations};
use super::plural::{PluralForms, plural_category};
use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use std::sync::Arc;

/// Placeholder substituted with the formatted count in plural forms.
pub const COUNT_PLACEHOLDER: &str = "{n}";

/// Localization capability consumed by the catalog loader and the renderer.
///
/// Every operation is a pure function of the translator's locale and its
/// input. Implementations report failures as [`BoardError::Translation`].
pub trait Translator: Send + Sync {
    fn locale(&self) -> &Locale;

    fn translate(&self, source: &str) -> Result<String>;

    fn translate_number(&self, n: i64) -> Result<String>;

    fn translate_date(&self, date: NaiveDate) -> Result<String>;

    /// Picks the form for `n` and substitutes `{n}` with the formatted count.
    fn translate_plural(&self, n: i64, forms: &PluralForms) -> Result<String>;
}

/// Returns its input unchanged. Numbers are plain, dates ISO-8601 and
/// plurals follow the English one/other rule.
#[derive(Debug, Clone)]
pub struct IdentityTranslator {
    locale: Locale,
}

impl IdentityTranslator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Default for IdentityTranslator {
    fn default() -> Self {
        Self {
            locale: Locale::source(),
        }
    }
}

impl Translator for IdentityTranslator {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn translate(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }

    fn translate_number(&self, n: i64) -> Result<String> {
        Ok(n.to_string())
    }

    fn translate_date(&self, date: NaiveDate) -> Result<String> {
        Ok(date.format("%Y-%m-%d").to_string())
    }

    fn translate_plural(&self, n: i64, forms: &PluralForms) -> Result<String> {
        let form = forms.select(plural_category(SOURCE_LANGUAGE, n));
        Ok(form.replace(COUNT_PLACEHOLDER, &n.to_string()))
    }
}

/// Translator backed by a static [`MessageCatalog`].
///
/// For the source language a missing entry yields the source text. For any
/// other language a missing entry is a [`BoardError::Translation`].
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    locale: Locale,
    catalog: Arc<MessageCatalog>,
}

impl CatalogTranslator {
    pub fn new(locale: Locale, catalog: Arc<MessageCatalog>) -> Self {
        Self { locale, catalog }
    }

    pub fn for_locale(translations: &Translations, locale: &Locale) -> Result<Self> {
        let catalog = translations.catalog_for(locale)?;
        Ok(Self::new(locale.clone(), catalog))
    }

    fn is_source_language(&self) -> bool {
        self.locale.language() == SOURCE_LANGUAGE
    }

    fn missing(&self, source: &str) -> BoardError {
        tracing::debug!(locale = %self.locale, source, "Missing translation");
        BoardError::translation(self.locale.as_str(), source)
    }
}

impl Translator for CatalogTranslator {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn translate(&self, source: &str) -> Result<String> {
        match self.catalog.message(source) {
            Some(text) => Ok(text.to_string()),
            None if self.is_source_language() => Ok(source.to_string()),
            None => Err(self.missing(source)),
        }
    }

    fn translate_number(&self, n: i64) -> Result<String> {
        Ok(format_number(self.locale.language(), n))
    }

    fn translate_date(&self, date: NaiveDate) -> Result<String> {
        Ok(format_date(self.locale.language(), date))
    }

    fn translate_plural(&self, n: i64, forms: &PluralForms) -> Result<String> {
        let localized = match self.catalog.plural(&forms.other) {
            Some(localized) => localized,
            None if self.is_source_language() => forms,
            None => return Err(self.missing(&forms.other)),
        };
        let category = plural_category(self.locale.language(), n);
        let count = self.translate_number(n)?;
        Ok(localized.select(category).replace(COUNT_PLACEHOLDER, &count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::PluralCategory;

    fn task_forms() -> PluralForms {
        PluralForms::new("{n} tasks").with(PluralCategory::One, "{n} task")
    }

    fn translator(tag: &str) -> CatalogTranslator {
        let translations = Translations::embedded().unwrap();
        CatalogTranslator::for_locale(&translations, &Locale::parse(tag).unwrap()).unwrap()
    }

    #[test]
    fn test_identity_passes_through() {
        let t = IdentityTranslator::default();
        assert_eq!(t.translate("To Do").unwrap(), "To Do");
        assert_eq!(t.translate_number(1234).unwrap(), "1234");
        let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(t.translate_date(due).unwrap(), "2026-03-01");
    }

    #[test]
    fn test_identity_plural() {
        let t = IdentityTranslator::default();
        assert_eq!(t.translate_plural(0, &task_forms()).unwrap(), "0 tasks");
        assert_eq!(t.translate_plural(1, &task_forms()).unwrap(), "1 task");
        assert_eq!(t.translate_plural(2, &task_forms()).unwrap(), "2 tasks");
    }

    #[test]
    fn test_catalog_translates() {
        assert_eq!(translator("es").translate("To Do").unwrap(), "Por hacer");
        assert_eq!(translator("ja").translate("Done").unwrap(), "完了");
    }

    #[test]
    fn test_source_language_falls_back_to_source_text() {
        let t = translator("en");
        assert_eq!(t.translate("Not in any catalog").unwrap(), "Not in any catalog");
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let err = translator("fr").translate("Not in any catalog").unwrap_err();
        match err {
            BoardError::Translation {
                locale,
                source_text,
            } => {
                assert_eq!(locale, "fr");
                assert_eq!(source_text, "Not in any catalog");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_french_plural_treats_zero_as_singular() {
        let t = translator("fr");
        assert_eq!(t.translate_plural(0, &task_forms()).unwrap(), "0 tâche");
        assert_eq!(t.translate_plural(1, &task_forms()).unwrap(), "1 tâche");
        assert_eq!(t.translate_plural(3, &task_forms()).unwrap(), "3 tâches");
    }

    #[test]
    fn test_japanese_plural_has_single_form() {
        let t = translator("ja");
        assert_eq!(t.translate_plural(1, &task_forms()).unwrap(), "1件のタスク");
        assert_eq!(t.translate_plural(3, &task_forms()).unwrap(), "3件のタスク");
    }

    #[test]
    fn test_unknown_plural_is_an_error_outside_source_language() {
        let forms = PluralForms::new("{n} widgets");
        assert!(translator("en").translate_plural(2, &forms).is_ok());
        assert!(translator("es").translate_plural(2, &forms).is_err());
    }

    #[test]
    fn test_plural_count_uses_locale_grouping() {
        let t = translator("en");
        assert_eq!(t.translate_plural(1500, &task_forms()).unwrap(), "1,500 tasks");
    }
}
