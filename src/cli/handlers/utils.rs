use crate::config::BoardConfig;
use crate::i18n::Locale;
use crate::model::{TaskPriority, TaskStatus};
use anyhow::Result;
use colored::Colorize;

/// Resolve the locale argument against the configured locale list.
pub fn resolve_locale(config: &BoardConfig, locale: Option<&str>) -> Result<Locale> {
    let Some(tag) = locale else {
        return Ok(config.i18n.default_locale.clone());
    };
    let locale = Locale::parse(tag)?;
    if !config.i18n.is_supported(&locale) {
        anyhow::bail!(
            "Unsupported locale: {} (supported: {})",
            locale,
            config
                .i18n
                .locales
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(locale)
}

pub fn format_priority(priority: TaskPriority, label: &str) -> colored::ColoredString {
    match priority {
        TaskPriority::High => label.red(),
        TaskPriority::Medium => label.yellow(),
        TaskPriority::Low => label.green(),
    }
}

pub fn format_column(status: TaskStatus, label: &str) -> colored::ColoredString {
    let label = label.to_uppercase();
    match status {
        TaskStatus::Todo => label.white().bold(),
        TaskStatus::InProgress => label.cyan().bold(),
        TaskStatus::Done => label.green().bold(),
    }
}
