//! Internationalization (i18n) module for the localized site.
//!
//! This module contains everything that turns a request path into a locale
//! and a locale into content.
//!
//! # Architecture
//!
//! - `registry`: Supported locales, the default locale and the URL prefix policy
//! - `paths`: Locale-prefixed path building and locale extraction from paths
//! - `source`: Content sources keyed by `(locale, page)`
//! - `cache`: Process-lifetime, append-only bundle cache
//! - `loader`: Cached bundle loading with default-locale fallback
//! - `translator`: `t(key)` lookups over a loaded bundle
//! - `pages`: Typed views of the site's page bundles
//! - `context`: Session-scoped current locale and bound path helpers
//! - `validator`: Completeness checks of translated bundles
//! - `metrics`: Loader counters
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::i18n::{create_localized_path, LocaleRegistry, TranslationLoader};
//!
//! let registry = LocaleRegistry::get();
//! let locale = registry.locale_from_pathname("/es/about");
//! let href = create_localized_path("/product", locale);
//!
//! let loader = TranslationLoader::for_registry(source, registry);
//! let home = loader.load(locale, "home").await?;
//! ```

mod cache;
mod context;
mod loader;
mod metrics;
pub mod pages;
mod paths;
mod registry;
mod source;
mod translator;
mod validator;

pub use cache::{TranslationBundle, TranslationCache};
pub use context::{LocaleContext, Navigator};
pub use loader::{AuditFinding, TranslationLoader};
pub use metrics::{LoaderMetrics, MetricsReport};
pub use paths::{create_localized_path, is_internal_link, localize_href};
pub use registry::{LocaleConfig, LocaleOption, LocaleRegistry};
pub use source::{ContentSource, DirectorySource, EmbeddedSource, COMMON};
pub use translator::Translator;
pub use validator::{BundleValidator, ValidationReport};
