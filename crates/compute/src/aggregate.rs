//! Receipt aggregation: folds every purchase record into per-seller totals.
//!
//! Revenue is credited from the receipt's stated total. Profit is built item
//! by item from the revenue strategy and the catalog cost basis. The two are
//! deliberately independent.
//!
//! Each receipt goes through two steps: `resolve` (lookups and per-item
//! profit, no shared state) and `replay` (arena updates, stats, miss events).
//! The parallel path runs `resolve` on rayon and `replay` on the calling
//! thread in input order, so sums are accumulated in exactly the same order
//! as the sequential path.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use sellerboard_core::{LineItem, LookupMiss, PurchaseRecord};

use crate::accumulator::SellerAccumulator;
use crate::index::CatalogIndex;
use crate::sink::LookupSink;
use crate::strategy::RevenueStrategy;

/// Counters for one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationStats {
    /// Receipts credited to a known seller.
    pub receipts_processed: u64,
    /// Receipts dropped because the seller was unknown.
    pub receipts_skipped: u64,
    /// Line items that contributed profit.
    pub items_processed: u64,
    /// Line items dropped because the SKU was unknown.
    pub items_skipped: u64,
}

impl AggregationStats {
    pub fn lookup_misses(&self) -> u64 {
        self.receipts_skipped + self.items_skipped
    }
}

/// A receipt with its references looked up and item profits priced.
enum ResolvedReceipt<'r> {
    UnknownSeller,
    Credited {
        slot: usize,
        lines: Vec<ResolvedLine<'r>>,
    },
}

enum ResolvedLine<'r> {
    Sold { item: &'r LineItem, profit: f64 },
    UnknownProduct { item: &'r LineItem },
}

/// Walks receipts and line items, resolving references through a [`CatalogIndex`].
pub struct Aggregator<'a> {
    index: &'a CatalogIndex<'a>,
    revenue: &'a dyn RevenueStrategy,
    sink: &'a dyn LookupSink,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        index: &'a CatalogIndex<'a>,
        revenue: &'a dyn RevenueStrategy,
        sink: &'a dyn LookupSink,
    ) -> Self {
        Self {
            index,
            revenue,
            sink,
        }
    }

    /// Aggregate on the calling thread, in input order.
    pub fn aggregate(
        &self,
        records: &[PurchaseRecord],
        arena: &mut [SellerAccumulator],
    ) -> AggregationStats {
        let mut stats = AggregationStats::default();
        for (receipt, record) in records.iter().enumerate() {
            let resolved = self.resolve(record);
            self.replay(receipt, record, resolved, arena, &mut stats);
        }
        stats
    }

    /// Resolve and price receipts on the rayon pool, then replay them onto the
    /// arena in input order.
    ///
    /// Output, stats and miss events are identical to [`Aggregator::aggregate`].
    /// `chunk_size` is the minimum number of receipts per rayon task; 0 is
    /// treated as 1.
    pub fn aggregate_parallel(
        &self,
        records: &[PurchaseRecord],
        arena: &mut [SellerAccumulator],
        chunk_size: usize,
    ) -> AggregationStats {
        let resolved: Vec<ResolvedReceipt<'_>> = records
            .par_iter()
            .with_min_len(chunk_size.max(1))
            .map(|record| self.resolve(record))
            .collect();

        debug!(receipts = resolved.len(), chunk_size, "replaying resolved receipts");

        let mut stats = AggregationStats::default();
        for (receipt, (record, resolved)) in records.iter().zip(resolved).enumerate() {
            self.replay(receipt, record, resolved, arena, &mut stats);
        }
        stats
    }

    /// Lookups and per-item profit. Touches no shared state.
    fn resolve<'r>(&self, record: &'r PurchaseRecord) -> ResolvedReceipt<'r> {
        let Some(slot) = self.index.seller_slot(&record.seller_id) else {
            return ResolvedReceipt::UnknownSeller;
        };

        let lines = record
            .items
            .iter()
            .map(|item| match self.index.product(&item.sku) {
                Some(product) => {
                    let cost = product.purchase_price * f64::from(item.quantity);
                    let revenue = self.revenue.revenue(item, product);
                    ResolvedLine::Sold {
                        item,
                        profit: revenue - cost,
                    }
                }
                None => ResolvedLine::UnknownProduct { item },
            })
            .collect();

        ResolvedReceipt::Credited { slot, lines }
    }

    /// Apply one resolved receipt. `receipt` is its input position.
    fn replay(
        &self,
        receipt: usize,
        record: &PurchaseRecord,
        resolved: ResolvedReceipt<'_>,
        arena: &mut [SellerAccumulator],
        stats: &mut AggregationStats,
    ) {
        let (slot, lines) = match resolved {
            ResolvedReceipt::UnknownSeller => {
                self.sink.lookup_miss(&LookupMiss::UnknownSeller {
                    receipt,
                    seller_id: record.seller_id.clone(),
                });
                stats.receipts_skipped += 1;
                return;
            }
            ResolvedReceipt::Credited { slot, lines } => (slot, lines),
        };

        let acc = &mut arena[slot];
        acc.record_receipt(record.total_amount);
        stats.receipts_processed += 1;

        for line in lines {
            match line {
                ResolvedLine::Sold { item, profit } => {
                    acc.record_item(&item.sku, item.quantity, profit);
                    stats.items_processed += 1;
                }
                ResolvedLine::UnknownProduct { item } => {
                    self.sink.lookup_miss(&LookupMiss::UnknownProduct {
                        receipt,
                        seller_id: record.seller_id.clone(),
                        sku: item.sku.clone(),
                    });
                    stats.items_skipped += 1;
                }
            }
        }
    }
}
