//! Registry metrics tracking.
//!
//! Counters for the outcomes of contact registration, cheap enough to update
//! on every add.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for registry add outcomes.
#[derive(Debug, Clone)]
pub struct RegistryMetrics {
    contacts_added_total: Arc<AtomicU64>,
    validation_failures_total: Arc<AtomicU64>,
    duplicate_rejections_total: Arc<AtomicU64>,
}

impl RegistryMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            duplicate_rejections_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a stored contact.
    pub fn track_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a contact rejected by field validation.
    pub fn track_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Track a contact rejected because its key was taken.
    pub fn track_duplicate(&self) {
        self.duplicate_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn duplicate_rejections_total(&self) -> u64 {
        self.duplicate_rejections_total.load(Ordering::Relaxed)
    }

    /// Total add attempts, successful or not.
    pub fn attempts_total(&self) -> u64 {
        self.contacts_added_total()
            + self.validation_failures_total()
            + self.duplicate_rejections_total()
    }

    /// Get the rejection rate (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let total = self.attempts_total() as f64;
        if total == 0.0 {
            0.0
        } else {
            (total - self.contacts_added_total() as f64) / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Contacts Added: {}\n\
             Validation Failures: {}\n\
             Duplicate Rejections: {}\n\
             Rejection Rate: {:.2}%",
            self.contacts_added_total(),
            self.validation_failures_total(),
            self.duplicate_rejections_total(),
            self.rejection_rate() * 100.0,
        )
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
