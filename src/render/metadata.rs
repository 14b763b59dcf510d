use crate::context::RenderContext;
use crate::error::Result;
use crate::i18n::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// Locale tag to canonical path, for alternate-language links.
    pub alternates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub locale: Locale,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

pub fn build_metadata(ctx: &RenderContext, locales: &[Locale]) -> Result<PageMetadata> {
    let translator = ctx.translator();
    let title = translator.translate("Task Manager | General Translation")?;
    let description = translator.translate(
        "A Kanban-style task board demonstrating internationalization with General Translation.",
    )?;

    let alternates = locales
        .iter()
        .map(|locale| (locale.to_string(), format!("/{}", locale)))
        .collect();

    Ok(PageMetadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            locale: ctx.locale.clone(),
            kind: "website".to_string(),
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: title.clone(),
            description: description.clone(),
        },
        title,
        description,
        alternates,
    })
}
