use serde::{Deserialize, Serialize};

use crate::record::{SellerId, Sku};

/// One entry of a seller's best-sellers list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Final per-seller result. Money fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

/// Round half away from zero to two decimal places.
///
/// Operates on the binary value, not the decimal literal: `1.005` is stored
/// as `1.00499999...` and rounds to `1.0`, while exact halves such as
/// `0.125` round away from zero to `0.13`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
