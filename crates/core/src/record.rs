use serde::{Deserialize, Serialize};

/// Seller identifier as it appears in the roster and on receipts.
pub type SellerId = String;

/// Catalog stock-keeping unit.
pub type Sku = String;

/// A seller from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// "First Last", as shown in reports.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry. Only the cost basis matters for profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub purchase_price: f64,
}

/// One product line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub quantity: u32,
    pub sale_price: f64,
    /// Percentage in `0..=100`.
    #[serde(default)]
    pub discount: f64,
}

/// A receipt attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    /// Stated receipt total. Credited to seller revenue as-is.
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The three source collections a report is computed from.
///
/// Absent collections deserialize as empty and are rejected by validation,
/// so "missing" and "empty" fail the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}
