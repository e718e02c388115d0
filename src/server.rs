//! HTTP surface: locale-prefixed page data, translation bundles and sitemap.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::I18nError;
use crate::i18n::pages::{ABOUT, HOME, PRODUCT};
use crate::i18n::{
    create_localized_path, ContentSource, LocaleOption, LocaleRegistry, MetricsReport,
    TranslationBundle, TranslationLoader,
};
use crate::sitemap::{build_sitemap, render_xml, DEFAULT_ROUTES};

/// Site-level settings the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute base URL used in the sitemap
    pub base_url: String,

    /// Route (locale stripped) -> page bundle name
    pub pages: BTreeMap<String, String>,

    /// Routes listed in the sitemap
    pub sitemap_routes: Vec<String>,
}

impl SiteConfig {
    pub fn new(base_url: &str) -> Self {
        let pages = [("/", HOME), ("/about", ABOUT), ("/product", PRODUCT)]
            .into_iter()
            .map(|(route, page)| (route.to_string(), page.to_string()))
            .collect();

        Self {
            base_url: base_url.to_string(),
            pages,
            sitemap_routes: DEFAULT_ROUTES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Serve `page` at `route`.
    pub fn with_page(mut self, route: &str, page: &str) -> Self {
        self.pages.insert(route.to_string(), page.to_string());
        self
    }

    /// Bundle names of every routed page.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.pages.values().map(String::as_str)
    }
}

/// Shared state for all handlers; created once at startup.
pub struct AppState<S> {
    pub registry: &'static LocaleRegistry,
    pub loader: TranslationLoader<S>,
    pub site: SiteConfig,
}

/// Error returned by handlers, rendered as a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("No page at '{0}'")]
    RouteNotFound(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::I18n(I18nError::InvalidLocale(_))
            | ApiError::I18n(I18nError::TranslationMissing { .. })
            | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::I18n(I18nError::ContentSourceUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::I18n(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::I18n(err) => err.code(),
            ApiError::RouteNotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Content and locale metadata for one localized page.
#[derive(Debug, Serialize)]
pub struct PageData {
    pub locale: &'static str,
    /// Route without the locale prefix
    pub path: String,
    pub page: String,
    /// Locale code -> path of this page in that locale
    pub alternates: BTreeMap<&'static str, String>,
    pub content: TranslationBundle,
    pub common: TranslationBundle,
}

#[derive(Debug, Deserialize)]
pub struct LocalesQuery {
    /// Page the selector is shown on; defaults to the root
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    pub locale: &'static str,
    pub default_locale: &'static str,
    pub options: Vec<LocaleOption>,
}

pub fn build_router<S: ContentSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap::<S>))
        .route("/api/locales", get(locales::<S>))
        .route("/api/metrics", get(metrics::<S>))
        .route("/api/translations/:locale/:page", get(translation::<S>))
        .fallback(page::<S>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve localized page data, redirecting unprefixed paths to the default locale.
async fn page<S: ContentSource>(
    State(state): State<Arc<AppState<S>>>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let registry = state.registry;
    let pathname = uri.path();

    let (locale, route) = match registry.locale_prefix(pathname) {
        Some(locale) => (locale, registry.remove_locale_from_pathname(pathname)),
        None if registry.prefix_default() => {
            let mut target = create_localized_path(pathname, registry.default_locale());
            if let Some(query) = uri.query() {
                target.push('?');
                target.push_str(query);
            }
            debug!("Redirecting {} -> {}", pathname, target);
            return Ok(Redirect::permanent(&target).into_response());
        }
        None => (registry.default_locale(), normalize_route(pathname)),
    };

    let page = state
        .site
        .pages
        .get(&route)
        .ok_or_else(|| ApiError::RouteNotFound(route.clone()))?
        .clone();

    let content = state.loader.load(locale, &page).await?;
    let common = state.loader.load_common(locale).await?;

    let alternates = registry
        .codes()
        .into_iter()
        .map(|code| (code, create_localized_path(&route, code)))
        .collect();

    Ok(Json(PageData {
        locale,
        path: route,
        page,
        alternates,
        content,
        common,
    })
    .into_response())
}

async fn translation<S: ContentSource>(
    State(state): State<Arc<AppState<S>>>,
    Path((locale, page)): Path<(String, String)>,
) -> Result<Json<TranslationBundle>, ApiError> {
    if !state.registry.is_valid_locale(&locale) {
        return Err(I18nError::InvalidLocale(locale).into());
    }

    let bundle = state.loader.load(&locale, &page).await?;
    Ok(Json(bundle))
}

async fn locales<S: ContentSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<LocalesQuery>,
) -> Json<LocalesResponse> {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    let locale = state.registry.locale_from_pathname(&path);

    Json(LocalesResponse {
        locale,
        default_locale: state.registry.default_locale(),
        options: state.registry.locale_options(locale, &path),
    })
}

async fn metrics<S: ContentSource>(State(state): State<Arc<AppState<S>>>) -> Json<MetricsReport> {
    Json(state.loader.metrics().report())
}

async fn sitemap<S: ContentSource>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    let routes: Vec<&str> = state.site.sitemap_routes.iter().map(String::as_str).collect();
    let entries = build_sitemap(&state.site.base_url, &routes, state.registry, Utc::now());

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_xml(&entries),
    )
}

fn normalize_route(pathname: &str) -> String {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
