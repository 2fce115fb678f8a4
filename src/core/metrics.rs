//! Logger metrics for observability
//!
//! Counters for what the logger did with each call, plus the failures it
//! absorbs silently (bad override, bad filter, failed writes).

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use sak::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_call();
/// metrics.record_printed();
///
/// assert_eq!(metrics.calls(), 1);
/// assert_eq!(metrics.printed(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Every call to `log`
    calls: AtomicU64,

    /// Entries written to at least one stream
    printed: AtomicU64,

    /// Entries assembled but not written
    suppressed: AtomicU64,

    /// Calls that returned before rendering (history off, level too high)
    early_exits: AtomicU64,

    /// Entries dropped from the front of the history
    evicted: AtomicU64,

    /// Level overrides that did not parse
    override_failures: AtomicU64,

    /// Filter patterns that did not compile
    filter_failures: AtomicU64,

    /// Failed writes to stdout or stderr
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            printed: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            early_exits: AtomicU64::new(0),
            evicted: AtomicU64::new(0),
            override_failures: AtomicU64::new(0),
            filter_failures: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn early_exits(&self) -> u64 {
        self.early_exits.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn evicted(&self) -> u64 {
        self.evicted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn override_failures(&self) -> u64 {
        self.override_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filter_failures(&self) -> u64 {
        self.filter_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Sum of the silently absorbed failures
    pub fn error_count(&self) -> u64 {
        self.override_failures() + self.filter_failures() + self.write_failures()
    }

    #[inline]
    pub fn record_call(&self) -> u64 {
        self.calls.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.printed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_early_exit(&self) -> u64 {
        self.early_exits.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_evicted(&self, count: u64) -> u64 {
        self.evicted.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_override_failure(&self) -> u64 {
        self.override_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filter_failure(&self) -> u64 {
        self.filter_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of assembled entries that were not printed, as a percentage
    ///
    /// Early exits are not counted since nothing was assembled for them.
    /// Returns 0.0 if nothing has been assembled yet.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed() as f64;
        let total = self.printed() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.printed.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.early_exits.store(0, Ordering::Relaxed);
        self.evicted.store(0, Ordering::Relaxed);
        self.override_failures.store(0, Ordering::Relaxed);
        self.filter_failures.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            calls: AtomicU64::new(self.calls()),
            printed: AtomicU64::new(self.printed()),
            suppressed: AtomicU64::new(self.suppressed()),
            early_exits: AtomicU64::new(self.early_exits()),
            evicted: AtomicU64::new(self.evicted()),
            override_failures: AtomicU64::new(self.override_failures()),
            filter_failures: AtomicU64::new(self.filter_failures()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
