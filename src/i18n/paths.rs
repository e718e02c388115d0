//! Path localization.
//!
//! These are plain string operations rather than URL parsing so that every
//! caller produces byte-identical paths.

use crate::i18n::LocaleRegistry;

/// Prefix `path` with `locale`.
///
/// `"/"` becomes `"/{locale}"`; any other path has one leading slash stripped
/// and becomes `"/{locale}/{path}"`. The locale is not validated.
pub fn create_localized_path(path: &str, locale: &str) -> String {
    if path == "/" {
        return format!("/{}", locale);
    }

    let clean_path = path.strip_prefix('/').unwrap_or(path);
    format!("/{}/{}", locale, clean_path)
}

/// Whether `href` points inside the site and should be localized.
pub fn is_internal_link(href: &str) -> bool {
    if href.starts_with("http")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return false;
    }

    href.starts_with('/') || !href.contains("://")
}

/// Rewrite an outbound link for `locale`, leaving external links untouched.
pub fn localize_href(href: &str, locale: &str, external: bool) -> String {
    if external || !is_internal_link(href) {
        href.to_string()
    } else {
        create_localized_path(href, locale)
    }
}

impl LocaleRegistry {
    /// Locale named by the first path segment, or the default locale.
    ///
    /// Empty segments are skipped, so `"//ja//about"` resolves to `ja`.
    ///
    /// # Arguments
    /// * `pathname` - Request path (e.g., "/pt/features/tables")
    ///
    /// # Returns
    /// The registered locale code; never fails.
    pub fn locale_from_pathname(&self, pathname: &str) -> &'static str {
        match self.locale_prefix(pathname) {
            Some(locale) => locale,
            None => self.default_locale(),
        }
    }

    /// Strip a leading locale segment from `pathname`.
    ///
    /// # Arguments
    /// * `pathname` - Request path, possibly locale-prefixed
    ///
    /// # Returns
    /// The remaining segments joined as `"/a/b"` (empty segments dropped), or
    /// `"/"` when only the locale was present. Paths without a registered
    /// locale segment are returned unchanged.
    pub fn remove_locale_from_pathname(&self, pathname: &str) -> String {
        if self.locale_prefix(pathname).is_none() {
            return pathname.to_string();
        }

        let remaining: Vec<&str> = segments(pathname).skip(1).collect();
        if remaining.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", remaining.join("/"))
        }
    }

    /// The page at `pathname`, addressed under `new_locale`.
    pub fn switch_locale_path(&self, pathname: &str, new_locale: &str) -> String {
        create_localized_path(&self.remove_locale_from_pathname(pathname), new_locale)
    }

    /// The registered locale named by the first path segment, if any.
    pub fn locale_prefix(&self, pathname: &str) -> Option<&'static str> {
        let first = segments(pathname).next()?;
        self.get_by_code(first).map(|locale| locale.code)
    }
}

fn segments(pathname: &str) -> impl Iterator<Item = &str> {
    pathname.split('/').filter(|segment| !segment.is_empty())
}
