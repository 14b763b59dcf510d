//! Locale routing: decides, per request path, whether to serve a localized
//! page, redirect to a locale-prefixed path, or leave the request alone.
//!
//! Everything here is synchronous and free of I/O so it can be unit tested
//! without a server. The axum layer in [`crate::server`] only applies the
//! [`RouteDecision`].

use crate::config::I18nSettings;
use crate::error::{BoardError, Result};
use crate::i18n::Locale;
use axum::http::HeaderMap;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};

/// Leading characters of paths the locale middleware never touches. Matched
/// against the path without its leading `/`, so `/_gtx` is excluded too.
pub const EXCLUDED_PREFIXES: &[&str] = &["_gt", "_assets", "favicon.ico"];

/// The parts of a request routing looks at.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub headers: &'a HeaderMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Not a page route (static file, internal path).
    Skip,
    /// The path already carries a supported locale.
    PassThrough { locale: Locale },
    /// Send the client to the locale-prefixed path.
    Redirect { location: String, locale: Locale },
}

/// Determines the preferred locale of a request.
pub trait LocaleResolver {
    fn resolve(&self, request: &RequestContext<'_>) -> Result<Locale>;
}

/// Resolves from the locale cookie, then `Accept-Language`.
pub struct NegotiatingResolver<'a> {
    settings: &'a I18nSettings,
}

impl<'a> NegotiatingResolver<'a> {
    pub fn new(settings: &'a I18nSettings) -> Self {
        Self { settings }
    }

    fn from_cookie(&self, headers: &HeaderMap) -> Option<Locale> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.settings.cookie_name)
            .and_then(|(_, value)| self.settings.supported(value.trim()))
            .cloned()
    }

    fn from_accept_language(&self, headers: &HeaderMap) -> Option<Locale> {
        let header = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
        parse_accept_language(header)
            .into_iter()
            .find_map(|tag| self.settings.supported(&tag))
            .cloned()
    }
}

impl LocaleResolver for NegotiatingResolver<'_> {
    fn resolve(&self, request: &RequestContext<'_>) -> Result<Locale> {
        self.from_cookie(request.headers)
            .or_else(|| self.from_accept_language(request.headers))
            .ok_or_else(|| {
                BoardError::LocaleResolution(format!(
                    "no supported locale in cookie or Accept-Language for {}",
                    request.path
                ))
            })
    }
}

/// Language ranges from an `Accept-Language` value, highest quality first.
///
/// Ranges with `q=0`, an unparseable weight or the `*` wildcard are dropped.
/// Equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut ranges: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|item| {
            let mut parts = item.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let mut quality = 1.0_f32;
            for param in parts {
                if let Some(q) = param.trim().strip_prefix("q=") {
                    quality = q.trim().parse().ok()?;
                }
            }
            (quality > 0.0).then(|| (tag.to_string(), quality))
        })
        .collect();
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges.into_iter().map(|(tag, _)| tag).collect()
}

pub fn is_excluded(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    EXCLUDED_PREFIXES.iter().any(|prefix| rest.starts_with(prefix)) || path.contains('.')
}

fn with_query(mut location: String, query: Option<&str>) -> String {
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }
    location
}

/// The supported locale named by the first path segment, if any.
pub fn path_locale(path: &str, settings: &I18nSettings) -> Option<Locale> {
    let segment = path.trim_start_matches('/').split('/').next()?;
    Locale::parse(segment)
        .ok()
        .filter(|locale| settings.is_supported(locale))
}

/// Routes one request using the given resolver. When the resolver fails the
/// configured default locale is used.
pub fn route_with(
    request: &RequestContext<'_>,
    settings: &I18nSettings,
    resolver: &dyn LocaleResolver,
) -> RouteDecision {
    if is_excluded(request.path) {
        return RouteDecision::Skip;
    }
    if let Some(locale) = path_locale(request.path, settings) {
        // `/fr/` is served as `/fr`
        if request.path.len() > 1 && request.path.ends_with('/') {
            let trimmed = request.path.trim_end_matches('/').to_string();
            let location = with_query(trimmed, request.query);
            return RouteDecision::Redirect { location, locale };
        }
        return RouteDecision::PassThrough { locale };
    }

    let locale = match resolver.resolve(request) {
        Ok(locale) => locale,
        Err(e) => {
            tracing::debug!(
                error = %e,
                default = %settings.default_locale,
                "Falling back to default locale"
            );
            settings.default_locale.clone()
        }
    };

    let mut location = format!("/{}", locale);
    if request.path != "/" {
        location.push_str(request.path);
    }
    let location = with_query(location, request.query);
    RouteDecision::Redirect { location, locale }
}

/// Routes one request with the cookie / `Accept-Language` resolver.
pub fn route(request: &RequestContext<'_>, settings: &I18nSettings) -> RouteDecision {
    route_with(request, settings, &NegotiatingResolver::new(settings))
}
