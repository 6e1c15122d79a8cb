//! Report pipeline orchestrator.
//!
//! Runs the stages strictly forward, in one call:
//!
//! - **Validate**: dataset collections non-empty, then both strategies present.
//! - **Index**: sellers by id (into a fresh accumulator arena), products by SKU.
//! - **Aggregate**: every receipt and line item, sequentially or on rayon.
//! - **Rank**: profit descending, bonuses, best sellers, rounding.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use sellerboard_core::{Dataset, Result, SellerReport};

use crate::aggregate::{AggregationStats, Aggregator};
use crate::index::CatalogIndex;
use crate::options::ReportOptions;
use crate::rank::rank_sellers;
use crate::validate::{validate_dataset, validate_options};

/// Ranked seller reports plus run counters.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    pub sellers: Vec<SellerReport>,
    pub stats: AggregationStats,
}

/// Reusable pipeline bound to one set of options.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    options: ReportOptions,
}

impl ReportPipeline {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Compute the report for `data`. Input is never mutated.
    ///
    /// Fails with `InvalidInput` or `InvalidConfiguration` (checked in that
    /// order) before any aggregation; lookup misses go to the configured sink.
    pub fn run(&self, data: &Dataset) -> Result<SalesReport> {
        validate_dataset(data)?;
        let (revenue, bonus) = validate_options(&self.options)?;

        let start = Instant::now();
        let settings = &self.options.settings;

        let (index, mut arena) = CatalogIndex::build(&data.sellers, &data.products)?;
        debug!(
            sellers = index.seller_count(),
            products = index.product_count(),
            "catalog index built"
        );
        if index.seller_count() < arena.len() {
            warn!(
                duplicates = arena.len() - index.seller_count(),
                "duplicate seller ids; receipts credit the last occurrence"
            );
        }
        let aggregator = Aggregator::new(&index, revenue, self.options.sink.as_ref());

        let stats = if settings.parallel {
            debug!(
                receipts = data.purchase_records.len(),
                chunk_size = settings.parallel_chunk_size,
                "aggregating in parallel"
            );
            aggregator.aggregate_parallel(
                &data.purchase_records,
                &mut arena,
                settings.parallel_chunk_size,
            )
        } else {
            aggregator.aggregate(&data.purchase_records, &mut arena)
        };

        let sellers = rank_sellers(&arena, bonus, settings.top_products_limit);

        info!(
            sellers = sellers.len(),
            receipts = data.purchase_records.len(),
            receipts_skipped = stats.receipts_skipped,
            items_skipped = stats.items_skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sales report completed"
        );

        Ok(SalesReport { sellers, stats })
    }
}

/// One-shot convenience: validate, aggregate and rank, returning only the reports.
pub fn calculate_sales_report(
    data: &Dataset,
    options: &ReportOptions,
) -> Result<Vec<SellerReport>> {
    ReportPipeline::new(options.clone())
        .run(data)
        .map(|report| report.sellers)
}
