use std::cmp::Ordering;

use sellerboard_core::{round2, SellerReport};

use crate::accumulator::SellerAccumulator;
use crate::strategy::BonusStrategy;

/// Sort key for profit. NaN sorts below every number, `-0.0` equals `0.0`.
fn profit_key(acc: &SellerAccumulator) -> f64 {
    let profit = acc.profit();
    if profit.is_nan() {
        f64::NEG_INFINITY
    } else {
        profit + 0.0
    }
}

/// Profit descending. Equal keys keep input order.
fn by_profit_desc(a: &SellerAccumulator, b: &SellerAccumulator) -> Ordering {
    profit_key(b).total_cmp(&profit_key(a))
}

/// Order accumulators by profit, attach bonuses and best sellers, and freeze
/// them into reports.
///
/// The arena is left in input order. Equal profits keep input order.
pub fn rank_sellers(
    arena: &[SellerAccumulator],
    bonus: &dyn BonusStrategy,
    top_products_limit: usize,
) -> Vec<SellerReport> {
    let mut ranked: Vec<&SellerAccumulator> = arena.iter().collect();
    ranked.sort_by(|a, b| by_profit_desc(a, b));

    let total = ranked.len();
    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, acc)| SellerReport {
            seller_id: acc.seller_id().to_string(),
            name: acc.name().to_string(),
            revenue: round2(acc.revenue()),
            profit: round2(acc.profit()),
            sales_count: acc.sales_count(),
            top_products: acc.top_products(top_products_limit),
            bonus: round2(bonus.bonus(rank, total, acc)),
        })
        .collect()
}
