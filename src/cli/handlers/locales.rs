use crate::i18n::Translations;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::CommandContext;

#[derive(Serialize)]
struct LocaleInfo<'a> {
    tag: &'a str,
    name: &'a str,
    path: String,
    default: bool,
    has_catalog: bool,
}

pub fn handle_locales(ctx: &CommandContext, json: bool) -> Result<()> {
    let translations = Translations::load(ctx.config.catalog_path(&ctx.root).as_deref())?;
    let i18n = &ctx.config.i18n;

    let infos: Vec<LocaleInfo> = i18n
        .locales
        .iter()
        .map(|locale| LocaleInfo {
            tag: locale.as_str(),
            name: locale.native_name(),
            path: format!("/{}", locale),
            default: *locale == i18n.default_locale,
            has_catalog: translations.has_locale(locale),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        let marker = if info.default { "*" } else { " " };
        let missing = if info.has_catalog {
            String::new()
        } else {
            format!(" {}", "(no catalog)".red())
        };
        println!(
            "{} {:<6} {:<10} {}{}",
            marker.green(),
            info.tag.cyan(),
            info.name,
            info.path.dimmed(),
            missing
        );
    }
    Ok(())
}
