use serde_json::Value;

use crate::i18n::TranslationBundle;

/// Key lookup over a loaded bundle.
///
/// Keys are either top-level names (`"signIn"`) or dotted paths into nested
/// content (`"hero.title"`, `"features.items.0.title"`). Lookups that do not
/// end at a non-empty string return the key itself, so a missing translation
/// shows up on the page instead of rendering blank.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    bundle: TranslationBundle,
}

impl Translator {
    pub fn new(locale: &str, bundle: TranslationBundle) -> Self {
        Self {
            locale: locale.to_string(),
            bundle,
        }
    }

    /// Locale the translator was requested for (its bundle may be a fallback).
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn data(&self) -> &Value {
        self.bundle.value()
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// The string at `key`, if there is one.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let root = self.bundle.value();
        let value = match root.get(key) {
            Some(value) => value,
            None => key
                .split('.')
                .try_fold(root, |node, segment| match node {
                    Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                    _ => node.get(segment),
                })?,
        };

        value.as_str().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translator() -> Translator {
        Translator::new(
            "fr",
            TranslationBundle::new(json!({
                "signIn": "Se connecter",
                "empty": "",
                "nav.docs": "Documentation",
                "hero": {"title": "Bonjour", "cta": {"primary": "Essayer"}},
                "features": {"items": [{"title": "Tables"}, {"title": "Agents"}]}
            })),
        )
    }

    #[test]
    fn test_top_level_key() {
        assert_eq!(translator().t("signIn"), "Se connecter");
    }

    #[test]
    fn test_dotted_path() {
        let t = translator();
        assert_eq!(t.t("hero.title"), "Bonjour");
        assert_eq!(t.t("hero.cta.primary"), "Essayer");
    }

    #[test]
    fn test_array_index_segment() {
        assert_eq!(translator().t("features.items.1.title"), "Agents");
        assert_eq!(translator().t("features.items.9.title"), "features.items.9.title");
    }

    #[test]
    fn test_literal_key_with_dot_wins() {
        assert_eq!(translator().t("nav.docs"), "Documentation");
    }

    #[test]
    fn test_missing_or_non_string_returns_key() {
        let t = translator();
        assert_eq!(t.t("missing"), "missing");
        assert_eq!(t.t("hero"), "hero");
        assert_eq!(t.t("empty"), "empty");
        assert_eq!(t.t("hero.title.deeper"), "hero.title.deeper");
    }

    #[test]
    fn test_lookup_and_accessors() {
        let t = translator();
        assert_eq!(t.lookup("hero.title"), Some("Bonjour"));
        assert_eq!(t.lookup("nope"), None);
        assert_eq!(t.locale(), "fr");
        assert!(t.data().get("features").is_some());
    }
}
