use std::sync::Arc;

use sellerboard_core::ReportSettings;

use crate::sink::{LookupSink, TracingSink};
use crate::strategy::{BonusStrategy, RankedBonus, RevenueStrategy, SimpleRevenue};

/// Strategies, miss sink and settings for a report run.
///
/// Both strategies must be present when the run starts; a missing one is an
/// `InvalidConfiguration` error, never a silent default.
#[derive(Clone)]
pub struct ReportOptions {
    pub revenue: Option<Arc<dyn RevenueStrategy>>,
    pub bonus: Option<Arc<dyn BonusStrategy>>,
    pub sink: Arc<dyn LookupSink>,
    pub settings: ReportSettings,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            revenue: None,
            bonus: None,
            sink: Arc::new(TracingSink),
            settings: ReportSettings::default(),
        }
    }
}

impl ReportOptions {
    /// No strategies configured. Add them with the `with_*` builders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discounted line revenue and the 15/10/5 rank bonus.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(RankedBonus::default())
    }

    pub fn with_revenue(mut self, revenue: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Arc::new(revenue));
        self
    }

    pub fn with_bonus(mut self, bonus: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Arc::new(bonus));
        self
    }

    /// Keep a clone of the `Arc` to read collected misses after the run.
    pub fn with_sink<S: LookupSink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_settings(mut self, settings: ReportSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl std::fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportOptions")
            .field("revenue", &self.revenue.as_ref().map(|_| "<strategy>"))
            .field("bonus", &self.bonus.as_ref().map(|_| "<strategy>"))
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
