//! Up-front checks. Every failure here aborts the run before aggregation.

use sellerboard_core::{Dataset, ReportError, Result};

use crate::index::require_non_empty;
use crate::options::ReportOptions;
use crate::strategy::{BonusStrategy, RevenueStrategy};

/// All three collections must be present and non-empty.
pub fn validate_dataset(data: &Dataset) -> Result<()> {
    require_non_empty("sellers", &data.sellers)?;
    require_non_empty("products", &data.products)?;
    require_non_empty("purchase_records", &data.purchase_records)?;
    Ok(())
}

/// Both strategies set and settings usable. Returns the strategies.
pub fn validate_options(
    options: &ReportOptions,
) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy)> {
    let revenue = options.revenue.as_deref().ok_or_else(|| {
        ReportError::InvalidConfiguration("revenue strategy is required".to_string())
    })?;
    let bonus = options.bonus.as_deref().ok_or_else(|| {
        ReportError::InvalidConfiguration("bonus strategy is required".to_string())
    })?;

    if options.settings.top_products_limit == 0 {
        return Err(ReportError::InvalidConfiguration(
            "top_products_limit must be at least 1".to_string(),
        ));
    }
    if options.settings.parallel_chunk_size == 0 {
        return Err(ReportError::InvalidConfiguration(
            "parallel_chunk_size must be at least 1".to_string(),
        ));
    }

    Ok((revenue, bonus))
}
