//! Pluggable pricing and compensation policies.
//!
//! The aggregator asks a [`RevenueStrategy`] for each line item's net revenue
//! and the reporter asks a [`BonusStrategy`] for each seller's bonus. Plain
//! closures with the matching signature implement both traits.

use sellerboard_core::{LineItem, Product};

use crate::accumulator::SellerAccumulator;

/// Net revenue for one purchased line item.
pub trait RevenueStrategy: Send + Sync {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Bonus for the seller at zero-based `rank` out of `total` sellers.
pub trait BonusStrategy: Send + Sync {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        self(rank, total, seller)
    }
}

// ── Revenue ─────────────────────────────────────────────────────────

/// `sale_price * quantity * (1 - discount / 100)`.
pub fn simple_revenue(item: &LineItem) -> f64 {
    item.sale_price * f64::from(item.quantity) * (1.0 - item.discount / 100.0)
}

/// Discounted line revenue; ignores the catalog entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        simple_revenue(item)
    }
}

// ── Bonus ───────────────────────────────────────────────────────────

/// Rank-tiered bonus as a share of profit.
///
/// Rules are checked in a fixed order, first match wins:
/// 1. profit <= 0 or NaN: no bonus
/// 2. rank 0: `top_rate`
/// 3. rank 1 or 2: `podium_rate`
/// 4. last place (only when more than 3 sellers): no bonus
/// 5. otherwise: `default_rate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedBonus {
    pub top_rate: f64,
    pub podium_rate: f64,
    pub default_rate: f64,
}

impl Default for RankedBonus {
    fn default() -> Self {
        Self {
            top_rate: 0.15,
            podium_rate: 0.10,
            default_rate: 0.05,
        }
    }
}

impl RankedBonus {
    pub fn bonus_for(&self, rank: usize, total: usize, profit: f64) -> f64 {
        if profit.is_nan() || profit <= 0.0 {
            0.0
        } else if rank == 0 {
            profit * self.top_rate
        } else if rank == 1 || rank == 2 {
            profit * self.podium_rate
        } else if total > 3 && rank == total - 1 {
            0.0
        } else {
            profit * self.default_rate
        }
    }
}

impl BonusStrategy for RankedBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        self.bonus_for(rank, total, seller.profit())
    }
}
