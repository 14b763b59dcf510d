use crate::context::RenderContext;
use crate::i18n::Translations;
use crate::model::TaskStatus;
use crate::render::{HtmlRenderer, Page, render_page};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_column, format_priority, resolve_locale};

/// Parameters for render operation
pub struct RenderParams {
    pub locale: Option<String>,
    pub json: bool,
    pub html: bool,
}

pub fn handle_render(ctx: &CommandContext, params: RenderParams) -> Result<()> {
    let locale = resolve_locale(&ctx.config, params.locale.as_deref())?;
    let translations = Translations::load(ctx.config.catalog_path(&ctx.root).as_deref())
        .context("Failed to load translations")?;
    let render_ctx = RenderContext::for_locale(&translations, &locale)?;
    let page = render_page(&render_ctx, &ctx.config.i18n.locales)
        .with_context(|| format!("Failed to render board for {}", locale))?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else if params.html {
        println!("{}", HtmlRenderer::new()?.render(&page)?);
    } else {
        print_board(&page);
    }
    Ok(())
}

fn print_board(page: &Page) {
    println!(
        "{} {} {}",
        page.header.brand.bold(),
        "/".dimmed(),
        page.header.product
    );
    println!("{}", page.board.summary.text.dimmed());

    for column in &page.board.columns {
        println!();
        println!(
            "{} {}",
            format_column(column.key, &column.label),
            format!("({})", column.count_label).dimmed()
        );
        for card in &column.cards {
            let title = if column.key == TaskStatus::Done {
                card.title.dimmed()
            } else {
                card.title.normal()
            };
            println!(
                "  {} {} [{}]",
                format!("#{}", card.id).cyan(),
                title,
                format_priority(card.priority, &card.priority_label)
            );
            println!("     {}", card.description.dimmed());
            println!(
                "     {} · {} {}",
                card.assignee, card.due.label, card.due.date
            );
        }
    }

    println!();
    for line in &page.footer.lines {
        println!("{}", line.plain().dimmed());
    }
}
