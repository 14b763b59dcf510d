use crate::error::Result;
use crate::i18n::{CatalogTranslator, Locale, Translations, Translator};
use std::sync::Arc;

/// Per-request rendering context: the resolved locale and its translator.
///
/// Built once per request and passed by reference to everything that
/// produces user-facing text.
#[derive(Clone)]
pub struct RenderContext {
    pub locale: Locale,
    pub translator: Arc<dyn Translator>,
}

impl RenderContext {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            locale: translator.locale().clone(),
            translator,
        }
    }

    pub fn for_locale(translations: &Translations, locale: &Locale) -> Result<Self> {
        let translator = CatalogTranslator::for_locale(translations, locale)?;
        Ok(Self::new(Arc::new(translator)))
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
