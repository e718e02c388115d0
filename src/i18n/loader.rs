//! Translation loader: cached bundle lookup with default-locale fallback.

use std::collections::BTreeSet;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::error::{ContentError, I18nError};
use crate::i18n::{
    BundleValidator, ContentSource, LoaderMetrics, LocaleRegistry, TranslationBundle,
    TranslationCache, Translator, ValidationReport, COMMON,
};

/// Validation result for one non-default bundle.
#[derive(Debug, Clone)]
pub struct AuditFinding {
    pub locale: String,
    pub page: String,
    pub report: ValidationReport,
}

/// Loads bundles from a [`ContentSource`] through a process-lifetime cache.
///
/// The loader is created once at startup and shared by every request; it owns
/// the cache, so there is no module-level state.
pub struct TranslationLoader<S> {
    source: S,
    cache: TranslationCache,
    metrics: LoaderMetrics,
    default_locale: String,
}

impl<S: ContentSource> TranslationLoader<S> {
    pub fn new(source: S, default_locale: &str) -> Self {
        Self {
            source,
            cache: TranslationCache::new(),
            metrics: LoaderMetrics::new(),
            default_locale: default_locale.to_string(),
        }
    }

    /// Loader falling back to the registry's default locale.
    pub fn for_registry(source: S, registry: &LocaleRegistry) -> Self {
        Self::new(source, registry.default_locale())
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn metrics(&self) -> &LoaderMetrics {
        &self.metrics
    }

    /// Load the bundle for `(locale, page)`.
    ///
    /// When the locale has no bundle for the page, the whole default-locale
    /// bundle is returned instead and cached under the requested key too, so
    /// a repeated miss never reaches the source again. Individual keys are
    /// never merged.
    ///
    /// # Arguments
    /// * `locale` - Requested locale code; not validated against the registry
    /// * `page` - Page identifier, or [`COMMON`] for the shared namespace
    ///
    /// # Returns
    /// The cached or freshly fetched bundle. Fails with `TranslationMissing`
    /// when the default locale has no bundle either, or with
    /// `ContentSourceUnavailable` when the source itself failed.
    pub async fn load(&self, locale: &str, page: &str) -> Result<TranslationBundle, I18nError> {
        if let Some(bundle) = self.cache.get(locale, page) {
            self.metrics.record_cache_hit();
            return Ok(bundle);
        }
        self.metrics.record_cache_miss();

        match self.fetch_and_cache(locale, page).await {
            Ok(bundle) => Ok(bundle),
            Err(err) if locale != self.default_locale => {
                warn!(
                    "Translation not found for {}/{} ({}), falling back to {}",
                    locale, page, err, self.default_locale
                );
                self.metrics.record_fallback();

                let bundle = match self.cache.get(&self.default_locale, page) {
                    Some(bundle) => bundle,
                    None => {
                        let default_locale = self.default_locale.clone();
                        self.fetch_and_cache(&default_locale, page)
                            .await
                            .map_err(|err| self.to_error(&default_locale, page, err))?
                    }
                };
                Ok(self.cache.insert(locale, page, bundle))
            }
            Err(err) => Err(self.to_error(locale, page, err)),
        }
    }

    /// Load the shared `common` namespace.
    pub async fn load_common(&self, locale: &str) -> Result<TranslationBundle, I18nError> {
        self.load(locale, COMMON).await
    }

    /// Load a bundle and deserialize it into a typed page.
    pub async fn load_page<T: DeserializeOwned>(
        &self,
        locale: &str,
        page: &str,
    ) -> Result<T, I18nError> {
        let bundle = self.load(locale, page).await?;
        T::deserialize(bundle.value()).map_err(|e| I18nError::MalformedBundle {
            locale: locale.to_string(),
            page: page.to_string(),
            reason: e.to_string(),
        })
    }

    /// Key lookup over one namespace (`common` or a page).
    pub async fn translator(&self, locale: &str, namespace: &str) -> Result<Translator, I18nError> {
        let bundle = self.load(locale, namespace).await?;
        Ok(Translator::new(locale, bundle))
    }

    /// Check that the default locale can answer every page the site serves.
    ///
    /// The default locale must provide `common`, every page in `required`,
    /// and every page that any other locale provides. Meant to run at startup
    /// so that content gaps fail the deploy instead of the first request.
    ///
    /// # Arguments
    /// * `required` - Pages the caller will request (e.g., the routed pages)
    ///
    /// # Returns
    /// `Ok(())` when nothing is missing, otherwise `TranslationMissing` for the
    /// first missing page in sorted order. Every missing page is logged.
    pub fn verify<'a, I>(&self, required: I) -> Result<(), I18nError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = self.source.entries();
        let default_pages: BTreeSet<String> = entries
            .iter()
            .filter(|(locale, _)| *locale == self.default_locale)
            .map(|(_, page)| page.clone())
            .collect();

        let expected: BTreeSet<String> = entries
            .into_iter()
            .map(|(_, page)| page)
            .chain(required.into_iter().map(str::to_string))
            .chain(std::iter::once(COMMON.to_string()))
            .collect();

        let missing: Vec<String> = expected
            .into_iter()
            .filter(|page| !default_pages.contains(page))
            .collect();

        for page in &missing {
            error!(
                "Default locale '{}' has no bundle for page '{}'",
                self.default_locale, page
            );
        }

        let first = missing.into_iter().next();
        match first {
            Some(page) => Err(I18nError::TranslationMissing {
                locale: self.default_locale.clone(),
                page,
            }),
            None => Ok(()),
        }
    }

    /// Load every bundle the source knows about into the cache.
    ///
    /// All loads run concurrently.
    ///
    /// # Returns
    /// The number of bundles loaded, or the first load error.
    pub async fn preload(&self) -> Result<usize, I18nError> {
        let entries = self.source.entries();
        let loads = entries
            .iter()
            .map(|(locale, page)| self.load(locale, page));

        let results = join_all(loads).await;
        let loaded = results.len();
        for result in results {
            result?;
        }

        info!("Preloaded {} translation bundles", loaded);
        Ok(loaded)
    }

    /// Validate every non-default bundle against its default-locale bundle.
    ///
    /// Only bundles with findings are returned.
    pub async fn audit(&self) -> Result<Vec<AuditFinding>, I18nError> {
        let mut findings = Vec::new();

        for (locale, page) in self.source.entries() {
            if locale == self.default_locale {
                continue;
            }

            let reference = self.load(&self.default_locale, &page).await?;
            let translated = self.load(&locale, &page).await?;
            let report = BundleValidator::validate(reference.value(), translated.value());
            if !report.is_clean() {
                findings.push(AuditFinding {
                    locale,
                    page,
                    report,
                });
            }
        }

        Ok(findings)
    }

    async fn fetch_and_cache(
        &self,
        locale: &str,
        page: &str,
    ) -> Result<TranslationBundle, ContentError> {
        self.metrics.record_source_fetch();
        match self.source.fetch(locale, page).await {
            Ok(value) => {
                debug!("Loaded translation {}", TranslationCache::key(locale, page));
                Ok(self
                    .cache
                    .insert(locale, page, TranslationBundle::new(value)))
            }
            Err(err) => {
                self.metrics.record_source_failure();
                Err(err)
            }
        }
    }

    fn to_error(&self, locale: &str, page: &str, err: ContentError) -> I18nError {
        match err {
            ContentError::NotFound => I18nError::TranslationMissing {
                locale: locale.to_string(),
                page: page.to_string(),
            },
            ContentError::Unavailable(reason) => {
                error!("Content source failed for {}/{}: {}", locale, page, reason);
                I18nError::ContentSourceUnavailable {
                    locale: locale.to_string(),
                    page: page.to_string(),
                    reason,
                }
            }
        }
    }
}
