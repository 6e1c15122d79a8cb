//! Observers for non-fatal lookup misses.

use std::sync::Mutex;

use tracing::warn;

use sellerboard_core::LookupMiss;

/// Receives every lookup miss the aggregator encounters.
///
/// Always called on the thread that runs the report, in receipt order, even
/// when parallel aggregation is enabled. Options are shared across threads,
/// so implementations must still be `Send + Sync`. Must not panic.
pub trait LookupSink: Send + Sync {
    fn lookup_miss(&self, miss: &LookupMiss);
}

impl<F> LookupSink for F
where
    F: Fn(&LookupMiss) + Send + Sync,
{
    fn lookup_miss(&self, miss: &LookupMiss) {
        self(miss)
    }
}

/// Default sink: one `warn!` per miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LookupSink for TracingSink {
    fn lookup_miss(&self, miss: &LookupMiss) {
        match miss {
            LookupMiss::UnknownSeller { receipt, seller_id } => {
                warn!(receipt, seller_id = %seller_id, "seller not found, skipping receipt");
            }
            LookupMiss::UnknownProduct {
                receipt,
                seller_id,
                sku,
            } => {
                warn!(receipt, seller_id = %seller_id, sku = %sku, "product not found, skipping line item");
            }
        }
    }
}

/// Keeps every miss in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    misses: Mutex<Vec<LookupMiss>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of misses seen so far.
    pub fn misses(&self) -> Vec<LookupMiss> {
        self.misses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.misses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LookupSink for CollectingSink {
    fn lookup_miss(&self, miss: &LookupMiss) {
        self.misses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(miss.clone());
    }
}
