use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Translation failed for locale {locale}: {source_text:?}")]
    Translation { locale: String, source_text: String },

    #[error("Unknown task status: {0}")]
    UnknownStatus(String),

    #[error("Unknown task priority: {0}")]
    UnknownPriority(String),

    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(u32),

    #[error("Could not resolve a locale: {0}")]
    LocaleResolution(String),

    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl BoardError {
    pub fn translation(locale: impl Into<String>, source_text: impl Into<String>) -> Self {
        BoardError::Translation {
            locale: locale.into(),
            source_text: source_text.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
