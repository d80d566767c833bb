//! Basic metrics instrumentation for tracking submissions.
//!
//! Provides counters and duration tracking for form submissions and email dispatch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the contact relay.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of form submissions received
    submissions_total: Arc<AtomicU64>,

    /// Submissions rejected by the validation gate
    validation_failures_total: Arc<AtomicU64>,

    /// Total number of dispatch attempts
    dispatch_total: Arc<AtomicU64>,

    /// Dispatch attempts that failed
    dispatch_errors_total: Arc<AtomicU64>,

    /// Total duration of all dispatch attempts in milliseconds
    dispatch_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            dispatch_total: Arc::new(AtomicU64::new(0)),
            dispatch_errors_total: Arc::new(AtomicU64::new(0)),
            dispatch_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a received submission.
    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission rejected by validation.
    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatch attempt with duration.
    pub fn record_dispatch(&self, duration: Duration) {
        self.dispatch_total.fetch_add(1, Ordering::Relaxed);
        self.dispatch_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed dispatch.
    pub fn record_dispatch_error(&self) {
        self.dispatch_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn dispatch_total(&self) -> u64 {
        self.dispatch_total.load(Ordering::Relaxed)
    }

    pub fn dispatch_errors_total(&self) -> u64 {
        self.dispatch_errors_total.load(Ordering::Relaxed)
    }

    /// Get average dispatch duration in milliseconds.
    pub fn dispatch_duration_avg_ms(&self) -> f64 {
        let total = self.dispatch_duration_total_ms.load(Ordering::Relaxed);
        let count = self.dispatch_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            validation_failures_total: self.validation_failures_total(),
            dispatch_total: self.dispatch_total(),
            dispatch_errors_total: self.dispatch_errors_total(),
            dispatch_duration_avg_ms: self.dispatch_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub validation_failures_total: u64,
    pub dispatch_total: u64,
    pub dispatch_errors_total: u64,
    pub dispatch_duration_avg_ms: f64,
}

/// Helper for timing a dispatch attempt.
pub struct DispatchTimer {
    start: Instant,
    metrics: Metrics,
}

impl DispatchTimer {
    /// Start timing a dispatch.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_dispatch(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_dispatch(self.start.elapsed());
        self.metrics.record_dispatch_error();
    }
}
