//! Resolution diagnostics
//!
//! Recoverable resolution events are counted here instead of being returned
//! as errors. Counters are relaxed atomics: they are shared by every thread
//! that resolves against the translator and never block.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Shared resolution counters
#[derive(Debug, Default)]
pub struct Diagnostics {
    misses: AtomicU64,
    drafts_served: AtomicU64,
    substitution_errors: AtomicU64,
    plural_fallbacks: AtomicU64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_draft_served(&self) {
        self.drafts_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_substitution_errors(&self, count: usize) {
        if count > 0 {
            self.substitution_errors
                .fetch_add(count as u64, Ordering::Relaxed);
        }
    }

    pub fn record_plural_fallback(&self) {
        self.plural_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current counter values
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            miss_count: self.misses.load(Ordering::Relaxed),
            draft_served_count: self.drafts_served.load(Ordering::Relaxed),
            substitution_error_count: self.substitution_errors.load(Ordering::Relaxed),
            plural_fallback_count: self.plural_fallbacks.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter, returning the values they held
    pub fn reset(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            miss_count: self.misses.swap(0, Ordering::Relaxed),
            draft_served_count: self.drafts_served.swap(0, Ordering::Relaxed),
            substitution_error_count: self.substitution_errors.swap(0, Ordering::Relaxed),
            plural_fallback_count: self.plural_fallbacks.swap(0, Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the diagnostics counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsSnapshot {
    pub miss_count: u64,
    pub draft_served_count: u64,
    pub substitution_error_count: u64,
    pub plural_fallback_count: u64,
}
