//! Sitemap generation.
//!
//! Every route is listed once per locale, and each entry links its
//! translations through `xhtml:link` alternates.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::i18n::LocaleRegistry;

/// Routes listed in the sitemap. The empty route is the locale root.
pub const DEFAULT_ROUTES: &[&str] = &[
    "",
    "/about",
    "/contact",
    "/blog",
    "/product",
    "/roadmap",
    "/faq",
    "/login",
    "/signup",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// Locale code -> URL of the same route in that locale
    pub alternates: BTreeMap<String, String>,
}

/// Build one entry per `(locale, route)` pair, locales in registry order.
pub fn build_sitemap(
    base_url: &str,
    routes: &[&str],
    registry: &LocaleRegistry,
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    let mut entries = Vec::with_capacity(registry.locales().len() * routes.len());

    for locale in registry.codes() {
        for route in routes {
            let is_root = route.is_empty();
            entries.push(SitemapEntry {
                url: format!("{}/{}{}", base_url, locale, route),
                last_modified,
                change_frequency: if is_root {
                    ChangeFrequency::Daily
                } else {
                    ChangeFrequency::Weekly
                },
                priority: if is_root { 1.0 } else { 0.8 },
                alternates: registry
                    .codes()
                    .into_iter()
                    .map(|alt| (alt.to_string(), format!("{}/{}{}", base_url, alt, route)))
                    .collect(),
            });
        }
    }

    entries
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape(&entry.url));
        for (locale, url) in &entry.alternates {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                escape(locale),
                escape(url)
            );
        }
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.format("%Y-%m-%dT%H:%M:%SZ")
        );
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.change_frequency.as_str());
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
