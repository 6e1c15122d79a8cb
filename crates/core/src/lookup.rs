use serde::{Deserialize, Serialize};

use crate::record::{SellerId, Sku};

/// A receipt or line item that referenced something not in the roster/catalog.
///
/// Non-fatal: the offending receipt (or item) is skipped and the run continues.
/// `receipt` is the zero-based position of the purchase record in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupMiss {
    UnknownSeller {
        receipt: usize,
        seller_id: SellerId,
    },
    UnknownProduct {
        receipt: usize,
        seller_id: SellerId,
        sku: Sku,
    },
}

impl LookupMiss {
    pub fn receipt(&self) -> usize {
        match self {
            LookupMiss::UnknownSeller { receipt, .. } | LookupMiss::UnknownProduct { receipt, .. } => {
                *receipt
            }
        }
    }
}

impl std::fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMiss::UnknownSeller { receipt, seller_id } => {
                write!(f, "receipt {}: unknown seller '{}'", receipt, seller_id)
            }
            LookupMiss::UnknownProduct { receipt, sku, .. } => {
                write!(f, "receipt {}: unknown product '{}'", receipt, sku)
            }
        }
    }
}
