//! Pipeline metrics for observability
//!
//! Counters kept by an [`EmitterProvider`](super::provider::EmitterProvider)
//! describing what happened to emitted records.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for pipeline observability
///
/// # Example
///
/// ```
/// use rust_log_pipeline::PipelineMetrics;
///
/// let metrics = PipelineMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_rejected();
///
/// assert_eq!(metrics.records_emitted(), 1);
/// assert_eq!(metrics.records_rejected(), 1);
/// ```
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Records handed to the processors
    records_emitted: AtomicU64,

    /// Records emitted after the provider was shut down
    records_rejected: AtomicU64,

    /// Processor calls that panicked during `on_emit`
    processor_failures: AtomicU64,

    /// Processors that failed to shut down
    shutdown_failures: AtomicU64,
}

impl PipelineMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            records_rejected: AtomicU64::new(0),
            processor_failures: AtomicU64::new(0),
            shutdown_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_rejected(&self) -> u64 {
        self.records_rejected.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn processor_failures(&self) -> u64 {
        self.processor_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn shutdown_failures(&self) -> u64 {
        self.shutdown_failures.load(Ordering::Relaxed)
    }

    /// Record a forwarded record, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.records_rejected.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_processor_failure(&self) -> u64 {
        self.processor_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_shutdown_failures(&self, count: u64) -> u64 {
        self.shutdown_failures.fetch_add(count, Ordering::Relaxed)
    }

    /// Share of emit calls that were rejected, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.records_rejected() as f64;
        let total = self.records_emitted() as f64 + rejected;
        if total == 0.0 {
            0.0
        } else {
            (rejected / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.records_rejected.store(0, Ordering::Relaxed);
        self.processor_failures.store(0, Ordering::Relaxed);
        self.shutdown_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PipelineMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_emitted: AtomicU64::new(self.records_emitted()),
            records_rejected: AtomicU64::new(self.records_rejected()),
            processor_failures: AtomicU64::new(self.processor_failures()),
            shutdown_failures: AtomicU64::new(self.shutdown_failures()),
        }
    }
}
