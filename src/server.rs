//! HTTP surface: one board page per supported locale plus a JSON view of
//! the same render tree.
//!
//! ## Routes
//!
//! - `GET /{locale}`: the HTML board
//! - `GET /{locale}/board.json`: the render tree as JSON
//!
//! Every request first goes through [`locale_layer`], which applies the
//! decision from [`crate::routing::route`].

use crate::config::BoardConfig;
use crate::context::RenderContext;
use crate::error::{BoardError, Result};
use crate::i18n::{Locale, Translations};
use crate::render::{HtmlRenderer, Page, render_page};
use crate::routing::{RequestContext, RouteDecision, route};
use axum::Router;
use axum::extract::{Path, Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::routing::get;
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BoardConfig>,
    pub translations: Arc<Translations>,
    pub html: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(config: BoardConfig, project_root: &FsPath) -> Result<Self> {
        let translations = Translations::load(config.catalog_path(project_root).as_deref())?;
        for locale in &config.i18n.locales {
            if !translations.has_locale(locale) {
                tracing::warn!(locale = %locale, "Configured locale has no message catalog");
            }
        }
        Ok(Self {
            config: Arc::new(config),
            translations: Arc::new(translations),
            html: Arc::new(HtmlRenderer::new()?),
        })
    }

    fn supported_locale(&self, tag: &str) -> std::result::Result<Locale, AppError> {
        Locale::parse(tag)
            .ok()
            .filter(|locale| self.config.i18n.is_supported(locale))
            .ok_or_else(|| AppError::NotFound(format!("Unsupported locale: {}", tag)))
    }

    fn render(&self, locale: &Locale) -> Result<Page> {
        let ctx = RenderContext::for_locale(&self.translations, locale)?;
        render_page(&ctx, &self.config.i18n.locales)
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Render(BoardError),
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        AppError::Render(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Render(e) => {
                tracing::error!(error = %e, "Render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render board: {}", e),
                )
                    .into_response()
            }
        }
    }
}

pub async fn board_page(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> std::result::Result<Html<String>, AppError> {
    let locale = state.supported_locale(&tag)?;
    let page = state.render(&locale)?;
    Ok(Html(state.html.render(&page)?))
}

pub async fn board_json(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> std::result::Result<Json<Page>, AppError> {
    let locale = state.supported_locale(&tag)?;
    Ok(Json(state.render(&locale)?))
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Applies the locale routing decision to every request.
pub async fn locale_layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let decision = route(
        &RequestContext {
            path: request.uri().path(),
            query: request.uri().query(),
            headers: request.headers(),
        },
        &state.config.i18n,
    );

    match decision {
        RouteDecision::Skip => next.run(request).await,
        RouteDecision::Redirect { location, locale } => {
            tracing::debug!(%location, %locale, "Redirecting to localized path");
            Redirect::temporary(&location).into_response()
        }
        RouteDecision::PassThrough { locale } => {
            let mut response = next.run(request).await;
            let cookie = format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                state.config.i18n.cookie_name, locale, COOKIE_MAX_AGE_SECS
            );
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
            response
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{locale}", get(board_page))
        .route("/{locale}/board.json", get(board_json))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), locale_layer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Serving task board");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
