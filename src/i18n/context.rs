//! Session-scoped locale state.
//!
//! A [`LocaleContext`] tracks the locale of one rendering session and hands
//! out path helpers bound to it. It follows the router: every navigation is
//! reported through [`LocaleContext::observe_pathname`], and explicit locale
//! changes push the equivalent page under the new locale.

use tracing::{debug, warn};

use crate::error::I18nError;
use crate::i18n::{paths, LocaleOption, LocaleRegistry};

/// The host router, as seen by the locale layer.
pub trait Navigator {
    /// Navigate to `path`.
    fn push(&mut self, path: &str);
}

pub struct LocaleContext<'r, N> {
    registry: &'r LocaleRegistry,
    locale: &'static str,
    pathname: String,
    navigator: N,
}

impl<'r, N: Navigator> LocaleContext<'r, N> {
    /// Start a session at `pathname`; the initial locale comes from the path.
    pub fn new(registry: &'r LocaleRegistry, pathname: &str, navigator: N) -> Self {
        Self {
            registry,
            locale: registry.locale_from_pathname(pathname),
            pathname: pathname.to_string(),
            navigator,
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn available_locales(&self) -> Vec<&'static str> {
        self.registry.codes()
    }

    pub fn default_locale(&self) -> &'static str {
        self.registry.default_locale()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Switch to `new_locale` and navigate to the current page under it.
    ///
    /// Unknown locales are logged and rejected; the session is left untouched.
    pub fn set_locale(&mut self, new_locale: &str) -> Result<(), I18nError> {
        let Some(config) = self.registry.get_by_code(new_locale) else {
            warn!("Invalid locale: {}", new_locale);
            return Err(I18nError::InvalidLocale(new_locale.to_string()));
        };

        let target = self.registry.switch_locale_path(&self.pathname, config.code);
        debug!("Switching locale {} -> {} ({})", self.locale, config.code, target);

        self.locale = config.code;
        self.pathname = target;
        self.navigator.push(&self.pathname);
        Ok(())
    }

    /// Keep the session in sync with the router's current location.
    pub fn observe_pathname(&mut self, pathname: &str) {
        let locale = self.registry.locale_from_pathname(pathname);
        if locale != self.locale {
            debug!("Locale changed by navigation: {} -> {}", self.locale, locale);
            self.locale = locale;
        }
        self.pathname = pathname.to_string();
    }

    /// [`paths::create_localized_path`] bound to the current locale.
    pub fn create_localized_path(&self, path: &str) -> String {
        paths::create_localized_path(path, self.locale)
    }

    /// [`paths::localize_href`] bound to the current locale.
    pub fn localize_href(&self, href: &str, external: bool) -> String {
        paths::localize_href(href, self.locale, external)
    }

    pub fn is_valid_locale(&self, candidate: &str) -> bool {
        self.registry.is_valid_locale(candidate)
    }

    /// Language selector entries for the current page.
    pub fn locale_options(&self) -> Vec<LocaleOption> {
        self.registry.locale_options(self.locale, &self.pathname)
    }
}
