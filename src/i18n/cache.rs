//! Process-lifetime translation cache.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, RwLock};

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Resolved content for one `(locale, page)` pair.
///
/// Clones share the underlying JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationBundle(Arc<Value>);

impl TranslationBundle {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Whether two handles point at the same cached allocation.
    pub fn ptr_eq(&self, other: &TranslationBundle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Serialize for TranslationBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl Deref for TranslationBundle {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

/// Append-only map from `(locale, page)` to a resolved bundle.
///
/// Entries are never evicted or replaced; a restart is required to pick up
/// changed content. The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<(String, String), TranslationBundle>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display form of a cache key, `"{locale}-{page}"`.
    ///
    /// Only used for logs; the map itself is keyed by the pair, since
    /// `("zh", "CN-home")` and `("zh-CN", "home")` share this string.
    pub fn key(locale: &str, page: &str) -> String {
        format!("{}-{}", locale, page)
    }

    pub fn get(&self, locale: &str, page: &str) -> Option<TranslationBundle> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&(locale.to_string(), page.to_string()))
            .cloned()
    }

    /// Store `bundle` unless the key is already populated, and return the
    /// bundle now cached under the key.
    pub fn insert(&self, locale: &str, page: &str, bundle: TranslationBundle) -> TranslationBundle {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries
            .entry((locale.to_string(), page.to_string()))
            .or_insert(bundle)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
