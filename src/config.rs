use crate::error::{BoardError, Result};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".lingoboard.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub i18n: I18nSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nSettings {
    #[serde(default = "default_locale")]
    pub default_locale: Locale,

    /// Supported locales, in switcher order.
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,

    /// Directory of `<locale>.yml` catalogs layered over the embedded ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_locale() -> Locale {
    Locale::source()
}

fn default_locales() -> Vec<Locale> {
    ["en", "es", "fr", "ja", "zh"]
        .iter()
        .filter_map(|tag| Locale::parse(tag).ok())
        .collect()
}

fn default_cookie_name() -> String {
    "lingoboard.locale".to_string()
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
            catalog_dir: None,
            cookie_name: default_cookie_name(),
        }
    }
}

impl I18nSettings {
    pub fn is_supported(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }

    /// Finds the configured locale matching `tag` exactly, or by language.
    pub fn supported(&self, tag: &str) -> Option<&Locale> {
        let locale = Locale::parse(tag).ok()?;
        self.locales
            .iter()
            .find(|l| **l == locale)
            .or_else(|| self.locales.iter().find(|l| l.language() == locale.language()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// RFC 6265 cookie-name token: visible ASCII, no separators.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
        })
}

impl BoardConfig {
    /// Loads the nearest config file above `start_path`, or the defaults when
    /// there is none. Returns the directory relative paths resolve against.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load_file(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BoardConfig = toml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BoardError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.i18n.locales.is_empty() {
            return Err(BoardError::Config("At least one locale is required".to_string()));
        }
        if !self.i18n.is_supported(&self.i18n.default_locale) {
            return Err(BoardError::Config(format!(
                "Default locale {} is not in the locale list",
                self.i18n.default_locale
            )));
        }
        if !is_cookie_token(&self.i18n.cookie_name) {
            return Err(BoardError::Config(format!(
                "Invalid cookie name {:?}: use visible ASCII without separators",
                self.i18n.cookie_name
            )));
        }
        Ok(())
    }

    pub fn catalog_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.i18n
            .catalog_dir
            .as_ref()
            .map(|dir| project_root.join(dir))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.i18n.default_locale.as_str(), "en");
        let tags: Vec<_> = config.i18n.locales.iter().map(Locale::as_str).collect();
        assert_eq!(tags, ["en", "es", "fr", "ja", "zh"]);
        assert_eq!(config.server.port, 3000);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, root) = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[i18n]\ndefault_locale = \"fr\"\nlocales = [\"fr\", \"en\"]\n\n[server]\nport = 8080\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = BoardConfig::load(&nested).unwrap();
        assert_eq!(config.i18n.default_locale.as_str(), "fr");
        assert_eq!(config.i18n.locales.len(), 2);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[i18n]\ndefault_locale = \"de\"\n").unwrap();
        let err = BoardConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_invalid_locale_tag_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[i18n]\nlocales = [\"en\", \"not a tag\"]\n").unwrap();
        assert!(BoardConfig::load_file(&path).is_err());
    }

    #[test]
    fn test_cookie_name_must_be_a_token() {
        for bad in ["", "lingo board", "locale;path", "caf\u{e9}", "a=b"] {
            let mut config = BoardConfig::default();
            config.i18n.cookie_name = bad.to_string();
            assert!(
                matches!(config.validate(), Err(BoardError::Config(_))),
                "{bad:?} should be rejected"
            );
        }

        let mut config = BoardConfig::default();
        config.i18n.cookie_name = "board_locale-v2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_cookie_name_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[i18n]\ncookie_name = \"my locale\"\n").unwrap();
        let err = BoardConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_supported_matches_language() {
        let settings = I18nSettings::default();
        assert_eq!(settings.supported("fr-CA").map(Locale::as_str), Some("fr"));
        assert_eq!(settings.supported("JA").map(Locale::as_str), Some("ja"));
        assert_eq!(settings.supported("de"), None);
        assert_eq!(settings.supported("???"), None);
    }

    #[test]
    fn test_save_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = BoardConfig::default();
        config.save(&path).unwrap();
        let (loaded, _) = BoardConfig::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
