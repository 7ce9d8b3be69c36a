//! Resolution metrics.
//!
//! Counts how lookups were satisfied: directly in the requested language,
//! through the default-language fallback, or not at all (raw key shown).
//! A climbing `missing_keys` count means a page references a key the string
//! tables do not define.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `LocalizationStore`.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Lookups answered in the requested language
    direct_hits: AtomicUsize,

    /// Lookups answered with the default-language text
    fallbacks: AtomicUsize,

    /// Lookups for keys the store does not know
    missing_keys: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct_hits = self.direct_hits();
        let fallbacks = self.fallbacks();
        let missing_keys = self.missing_keys();
        let total = direct_hits + fallbacks + missing_keys;
        let fallback_rate = if total > 0 {
            (fallbacks as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            direct_hits,
            fallbacks,
            missing_keys,
            fallback_rate,
        }
    }
}

/// Snapshot of the resolution counters, served by `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups
    pub lookups: usize,

    pub direct_hits: usize,

    pub fallbacks: usize,

    pub missing_keys: usize,

    /// Share of lookups that fell back to the default language (0-100)
    pub fallback_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = ResolutionMetrics::new();
        assert_eq!(metrics.direct_hits(), 0);
        assert_eq!(metrics.fallbacks(), 0);
        assert_eq!(metrics.missing_keys(), 0);
    }

    #[test]
    fn test_record_each_outcome() {
        let metrics = ResolutionMetrics::new();
        metrics.record_direct_hit();
        metrics.record_direct_hit();
        metrics.record_fallback();
        metrics.record_missing_key();

        assert_eq!(metrics.direct_hits(), 2);
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.missing_keys(), 1);
    }

    #[test]
    fn test_report_empty() {
        let report = ResolutionMetrics::new().report();
        assert_eq!(report.lookups, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_report_fallback_rate() {
        let metrics = ResolutionMetrics::new();
        for _ in 0..3 {
            metrics.record_direct_hit();
        }
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert!((report.fallback_rate - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = ResolutionMetrics::new();
        metrics.record_missing_key();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["missing_keys"], 1);
        assert_eq!(json["lookups"], 1);
    }
}
