//! Content sources: where translation bundles come from.
//!
//! A source is keyed by `(locale, page)` and must be able to enumerate every
//! key it serves, so that gaps in the content can be detected at startup
//! instead of at first request.

use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ContentError;

/// Page identifier of the namespace shared by every page (navigation, footer, ...).
pub const COMMON: &str = "common";

/// Asynchronous provider of raw translation bundles.
pub trait ContentSource: Send + Sync {
    /// Retrieve the bundle for `(locale, page)`.
    fn fetch(
        &self,
        locale: &str,
        page: &str,
    ) -> impl Future<Output = Result<Value, ContentError>> + Send;

    /// Every `(locale, page)` pair this source can serve, sorted.
    fn entries(&self) -> Vec<(String, String)>;
}

/// Bundles held in memory, registered up front.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    bundles: HashMap<(String, String), Value>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`EmbeddedSource::insert`].
    pub fn with(mut self, locale: &str, page: &str, bundle: Value) -> Self {
        self.insert(locale, page, bundle);
        self
    }

    pub fn insert(&mut self, locale: &str, page: &str, bundle: Value) {
        self.bundles
            .insert((locale.to_string(), page.to_string()), bundle);
    }
}

impl ContentSource for EmbeddedSource {
    async fn fetch(&self, locale: &str, page: &str) -> Result<Value, ContentError> {
        self.bundles
            .get(&(locale.to_string(), page.to_string()))
            .cloned()
            .ok_or(ContentError::NotFound)
    }

    fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self.bundles.keys().cloned().collect();
        entries.sort();
        entries
    }
}

/// Bundles stored as JSON files on disk.
///
/// Layout:
///
/// ```text
/// {root}/{locale}/common.json
/// {root}/{locale}/pages/{page}.json
/// ```
///
/// The directory is indexed once when the source is opened; files added later
/// are not visible until the process restarts.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    index: BTreeSet<(String, String)>,
}

impl DirectorySource {
    /// Open `root` and index the bundles it contains.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, ContentError> {
        let root = root.as_ref().to_path_buf();
        let mut index = BTreeSet::new();

        let mut locales = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = locales.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let Some(locale) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            if tokio::fs::try_exists(entry.path().join("common.json")).await? {
                index.insert((locale.clone(), COMMON.to_string()));
            }

            let pages_dir = entry.path().join("pages");
            if !tokio::fs::try_exists(&pages_dir).await? {
                continue;
            }
            let mut pages = tokio::fs::read_dir(&pages_dir).await?;
            while let Some(page) = pages.next_entry().await? {
                let path = page.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                // `common` is served from `{locale}/common.json` only.
                if name == COMMON {
                    warn!("Ignoring {}: '{}' is a reserved page name", path.display(), COMMON);
                    continue;
                }
                index.insert((locale.clone(), name.to_string()));
            }
        }

        debug!("Indexed {} bundles under {}", index.len(), root.display());
        Ok(Self { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bundle_path(&self, locale: &str, page: &str) -> PathBuf {
        if page == COMMON {
            self.root.join(locale).join("common.json")
        } else {
            self.root
                .join(locale)
                .join("pages")
                .join(format!("{}.json", page))
        }
    }
}

impl ContentSource for DirectorySource {
    async fn fetch(&self, locale: &str, page: &str) -> Result<Value, ContentError> {
        // Only indexed keys are readable; this also keeps arbitrary request
        // strings from turning into filesystem paths.
        if !self.index.contains(&(locale.to_string(), page.to_string())) {
            return Err(ContentError::NotFound);
        }

        let raw = tokio::fs::read(self.bundle_path(locale, page)).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.index.iter().cloned().collect()
    }
}
