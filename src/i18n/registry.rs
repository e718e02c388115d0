//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is immutable once built. The site's built-in registry is a
//! process-wide singleton initialized lazily through `OnceLock`; custom
//! registries can be built with [`LocaleRegistry::new`], which validates the
//! invariants up front.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::I18nError;

/// Metadata for one supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale identifier, used both as URL segment and bundle key (e.g., "en", "zh-CN")
    pub code: &'static str,

    /// English name of the language (e.g., "Portuguese")
    pub name: &'static str,

    /// Name shown in the language selector (e.g., "Português")
    pub native_name: &'static str,
}

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub selected: bool,
    /// Where choosing this option navigates to
    pub href: String,
}

/// The set of supported locales, the default locale and the URL prefix policy.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_locale: &'static str,
    prefix_default: bool,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry, checking that the locale list is non-empty, free of
    /// duplicates, and contains the default locale.
    ///
    /// # Arguments
    /// * `locales` - Supported locales, in selector order
    /// * `default_locale` - Code used when a path names no locale
    /// * `prefix_default` - Whether default-locale URLs carry the `/{code}` prefix
    ///
    /// # Returns
    /// The registry, or `InvalidRegistry` describing the first violated rule.
    pub fn new(
        locales: Vec<LocaleConfig>,
        default_locale: &'static str,
        prefix_default: bool,
    ) -> Result<Self, I18nError> {
        if locales.is_empty() {
            return Err(I18nError::InvalidRegistry(
                "at least one locale is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for locale in &locales {
            if locale.code.is_empty() || locale.code.contains('/') {
                return Err(I18nError::InvalidRegistry(format!(
                    "'{}' is not usable as a path segment",
                    locale.code
                )));
            }
            if !seen.insert(locale.code) {
                return Err(I18nError::InvalidRegistry(format!(
                    "duplicate locale '{}'",
                    locale.code
                )));
            }
        }

        if !seen.contains(default_locale) {
            return Err(I18nError::InvalidRegistry(format!(
                "default locale '{}' is not in the locale list",
                default_locale
            )));
        }

        Ok(Self {
            locales,
            default_locale,
            prefix_default,
        })
    }

    /// Get the site's global registry.
    ///
    /// Built on first call with the site's 19 locales, `en` as default and
    /// prefixed default-locale URLs; immutable afterwards.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
            default_locale: "en",
            prefix_default: true,
        })
    }

    /// Check whether `candidate` is a supported locale.
    ///
    /// # Arguments
    /// * `candidate` - Any string, typically a path segment
    ///
    /// # Returns
    /// `true` if the registry holds a locale with exactly this code.
    pub fn is_valid_locale(&self, candidate: &str) -> bool {
        self.get_by_code(candidate).is_some()
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "pt", "zh-CN"); matching is case-sensitive
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in registry order.
    pub fn locales(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Supported locale codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    /// Locale used for unprefixed paths and as the translation fallback.
    pub fn default_locale(&self) -> &'static str {
        self.default_locale
    }

    /// Whether the default locale still appears as a URL prefix.
    pub fn prefix_default(&self) -> bool {
        self.prefix_default
    }

    /// Build the options a language selector displays while `pathname` is
    /// shown under `current`.
    ///
    /// # Arguments
    /// * `current` - Locale the page is rendered in
    /// * `pathname` - Current path, with or without a locale prefix
    ///
    /// # Returns
    /// One option per locale in registry order, each pointing at the same page
    /// under that locale; only `current` is marked selected.
    pub fn locale_options(&self, current: &str, pathname: &str) -> Vec<LocaleOption> {
        self.locales
            .iter()
            .map(|locale| LocaleOption {
                code: locale.code,
                native_name: locale.native_name,
                selected: locale.code == current,
                href: self.switch_locale_path(pathname, locale.code),
            })
            .collect()
    }
}

/// Locales served by the site.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LocaleConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
        },
        LocaleConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
        },
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
        },
        LocaleConfig {
            code: "zh-CN",
            name: "Chinese (Simplified)",
            native_name: "中文 (简体)",
        },
        LocaleConfig {
            code: "zh-TW",
            name: "Chinese (Traditional)",
            native_name: "中文 (繁體)",
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
        },
        LocaleConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
        },
        LocaleConfig {
            code: "pl",
            name: "Polish",
            native_name: "Polski",
        },
        LocaleConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
        },
        LocaleConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
        },
        LocaleConfig {
            code: "th",
            name: "Thai",
            native_name: "ภาษาไทย",
        },
        LocaleConfig {
            code: "vi",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
        },
        LocaleConfig {
            code: "ms",
            name: "Malay",
            native_name: "Bahasa Melayu",
        },
        LocaleConfig {
            code: "tl",
            name: "Tagalog",
            native_name: "Tagalog",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(code: &'static str) -> LocaleConfig {
        LocaleConfig {
            code,
            name: code,
            native_name: code,
        }
    }

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_builtin_registry_shape() {
        let registry = LocaleRegistry::get();

        assert_eq!(registry.locales().len(), 19);
        assert_eq!(registry.default_locale(), "en");
        assert!(registry.prefix_default());
        assert_eq!(registry.codes()[0], "en");
        assert!(registry.codes().contains(&"zh-TW"));
    }

    #[test]
    fn test_builtin_registry_passes_validation() {
        let builtin = LocaleRegistry::get();
        let rebuilt = LocaleRegistry::new(
            builtin.locales().to_vec(),
            builtin.default_locale(),
            builtin.prefix_default(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_get_by_code() {
        let registry = LocaleRegistry::get();
        let pt = registry.get_by_code("pt").expect("pt is registered");

        assert_eq!(pt.name, "Portuguese");
        assert_eq!(pt.native_name, "Português");
        assert!(registry.get_by_code("xx").is_none());
    }

    #[test]
    fn test_is_valid_locale_is_case_sensitive() {
        let registry = LocaleRegistry::get();

        assert!(registry.is_valid_locale("zh-CN"));
        assert!(!registry.is_valid_locale("zh-cn"));
        assert!(!registry.is_valid_locale(""));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = LocaleRegistry::new(vec![], "en", true);
        assert!(matches!(result, Err(I18nError::InvalidRegistry(_))));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = LocaleRegistry::new(vec![config("en"), config("en")], "en", true);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_new_rejects_unknown_default() {
        let result = LocaleRegistry::new(vec![config("en"), config("es")], "fr", true);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_new_rejects_slash_in_code() {
        let result = LocaleRegistry::new(vec![config("en/us")], "en/us", true);
        assert!(result.is_err());
    }

    #[test]
    fn test_locale_options_marks_current_and_links_equivalent_page() {
        let registry =
            LocaleRegistry::new(vec![config("en"), config("es")], "en", true).unwrap();
        let options = registry.locale_options("es", "/es/about");

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].code, "en");
        assert!(!options[0].selected);
        assert_eq!(options[0].href, "/en/about");
        assert!(options[1].selected);
        assert_eq!(options[1].href, "/es/about");
    }
}
