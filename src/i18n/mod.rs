//! Localization: locale tags, plural rules, formatting and translators.
//!
//! The rest of the crate only talks to the [`Translator`] trait. Two
//! implementations ship here:
//!
//! - [`CatalogTranslator`]: looks strings up in a [`MessageCatalog`] and
//!   formats numbers, dates and plurals with the locale's rules
//! - [`IdentityTranslator`]: returns its input unchanged, for tests

mod format;
mod locale;
mod messages;
mod plural;
mod translator;

pub use format::{format_date, format_number};
pub use locale::{Locale, SOURCE_LANGUAGE};
pub use messages::{MessageCatalog, Translations};
pub use plural::{PluralCategory, PluralForms, plural_category};
pub use translator::{CatalogTranslator, COUNT_PLACEHOLDER, IdentityTranslator, Translator};
