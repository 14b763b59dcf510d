use crate::routing::{RequestContext, RouteDecision, route};
use anyhow::{Context, Result};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use colored::Colorize;

use super::CommandContext;

/// Parameters for route operation
pub struct RouteParams {
    pub path: String,
    pub accept_language: Option<String>,
    pub cookie: Option<String>,
}

pub fn handle_route(ctx: &CommandContext, params: RouteParams) -> Result<()> {
    let mut headers = HeaderMap::new();
    if let Some(value) = params.accept_language {
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&value).context("Invalid Accept-Language value")?,
        );
    }
    if let Some(value) = params.cookie {
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&value).context("Invalid cookie value")?,
        );
    }

    let (path, query) = match params.path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (params.path.as_str(), None),
    };
    if !path.starts_with('/') {
        anyhow::bail!("Path must start with '/': {}", path);
    }

    let request = RequestContext {
        path,
        query,
        headers: &headers,
    };
    match route(&request, &ctx.config.i18n) {
        RouteDecision::Skip => println!("{} {}", "skip".dimmed(), path),
        RouteDecision::PassThrough { locale } => {
            println!("{} {} ({})", "serve".green(), path, locale.to_string().cyan())
        }
        RouteDecision::Redirect { location, locale } => println!(
            "{} {} -> {} ({})",
            "redirect".yellow(),
            path,
            location,
            locale.to_string().cyan()
        ),
    }
    Ok(())
}
