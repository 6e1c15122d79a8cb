//! `sellerboard-compute`: per-seller sales performance reports.
//!
//! Pure engine crate: receives already-parsed sellers, catalog and receipts,
//! returns ranked [`SellerReport`]s. No IO.

pub mod accumulator;
pub mod aggregate;
pub mod index;
pub mod options;
pub mod pipeline;
pub mod rank;
pub mod sink;
pub mod strategy;
pub mod validate;

pub use accumulator::SellerAccumulator;
pub use aggregate::{AggregationStats, Aggregator};
pub use index::CatalogIndex;
pub use options::ReportOptions;
pub use pipeline::{calculate_sales_report, ReportPipeline, SalesReport};
pub use sink::{CollectingSink, LookupSink, TracingSink};
pub use strategy::{simple_revenue, BonusStrategy, RankedBonus, RevenueStrategy, SimpleRevenue};

pub use sellerboard_core::{
    Dataset, LineItem, LookupMiss, Product, PurchaseRecord, ReportError, ReportSettings, Seller,
    SellerReport, TopProduct,
};
