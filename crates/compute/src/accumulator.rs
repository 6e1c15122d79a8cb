use indexmap::IndexMap;

use sellerboard_core::{Seller, SellerId, Sku, TopProduct};

/// Running totals for one seller while receipts are being aggregated.
///
/// One is allocated per input seller before aggregation and only the
/// aggregator mutates it. Strategies and the reporter see it by shared
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    seller_id: SellerId,
    name: String,
    revenue: f64,
    profit: f64,
    sales_count: u64,
    /// Units sold per SKU, in first-seen order.
    products_sold: IndexMap<Sku, u64>,
}

impl SellerAccumulator {
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: IndexMap::new(),
        }
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub fn products_sold(&self) -> &IndexMap<Sku, u64> {
        &self.products_sold
    }

    /// Best sellers by quantity, at most `limit` entries.
    ///
    /// Equal quantities keep first-seen order.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut top: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();
        top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top.truncate(limit);
        top
    }

    pub(crate) fn record_receipt(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    pub(crate) fn record_item(&mut self, sku: &str, quantity: u32, profit: f64) {
        self.profit += profit;
        match self.products_sold.get_mut(sku) {
            Some(sold) => *sold += u64::from(quantity),
            None => {
                self.products_sold.insert(sku.to_string(), u64::from(quantity));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_profit(seller_id: &str, profit: f64) -> Self {
        Self {
            seller_id: seller_id.to_string(),
            name: seller_id.to_string(),
            revenue: 0.0,
            profit,
            sales_count: 0,
            products_sold: IndexMap::new(),
        }
    }
}
