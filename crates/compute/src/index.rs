use std::collections::HashMap;

use sellerboard_core::{Product, ReportError, Result, Seller};

use crate::accumulator::SellerAccumulator;

/// O(1) lookup of sellers and products by key.
///
/// Sellers map to a slot in the accumulator arena returned by [`CatalogIndex::build`].
/// Duplicate ids or SKUs are not rejected: the last occurrence wins.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    seller_slots: HashMap<&'a str, usize>,
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
    /// Index both collections and allocate one accumulator per seller, in input order.
    pub fn build(
        sellers: &'a [Seller],
        products: &'a [Product],
    ) -> Result<(Self, Vec<SellerAccumulator>)> {
        require_non_empty("sellers", sellers)?;
        require_non_empty("products", products)?;

        let mut seller_slots = HashMap::with_capacity(sellers.len());
        let mut arena = Vec::with_capacity(sellers.len());
        for (slot, seller) in sellers.iter().enumerate() {
            seller_slots.insert(seller.id.as_str(), slot);
            arena.push(SellerAccumulator::new(seller));
        }

        let products: HashMap<&str, &Product> =
            products.iter().map(|p| (p.sku.as_str(), p)).collect();

        Ok((
            Self {
                seller_slots,
                products,
            },
            arena,
        ))
    }

    /// Arena slot for a seller id, if on the roster.
    pub fn seller_slot(&self, seller_id: &str) -> Option<usize> {
        self.seller_slots.get(seller_id).copied()
    }

    pub fn product(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    /// Distinct seller ids. Lower than the arena length when ids repeat.
    pub fn seller_count(&self) -> usize {
        self.seller_slots.len()
    }

    /// Distinct SKUs.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Reject an empty source collection with `InvalidInput`.
pub(crate) fn require_non_empty<T>(name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ReportError::InvalidInput(format!(
            "{name} must be a non-empty collection"
        )));
    }
    Ok(())
}
