//! Translation loader metrics.
//!
//! Each loader owns one set of counters, so independent loaders (and tests)
//! never observe each other's traffic.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LoaderMetrics {
    /// Lookups answered from the cache
    cache_hits: AtomicUsize,

    /// Lookups that had to go to the content source
    cache_misses: AtomicUsize,

    /// Calls made to the content source
    source_fetches: AtomicUsize,

    /// Content source calls that failed (missing or unavailable)
    source_failures: AtomicUsize,

    /// Lookups answered with the default locale's bundle
    fallbacks: AtomicUsize,
}

impl LoaderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_source_fetch(&self) {
        self.source_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_source_failure(&self) {
        self.source_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn source_fetches(&self) -> usize {
        self.source_fetches.load(Ordering::Relaxed)
    }

    pub fn source_failures(&self) -> usize {
        self.source_failures.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Snapshot the counters.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total = hits + misses;
        let cache_hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            source_fetches: self.source_fetches(),
            source_failures: self.source_failures(),
            fallbacks: self.fallbacks(),
        }
    }
}

/// Point-in-time view of a loader's counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub source_fetches: usize,
    pub source_failures: usize,
    pub fallbacks: usize,
}
