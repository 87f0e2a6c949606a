//! Hot-Deal Tier Model

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Hot-deal tier entity
///
/// Maps a range of cumulative units sold to a discount percentage. Both
/// bounds are inclusive; `max_sold = None` leaves the tier open-ended.
/// Active tiers should not overlap; the resolver treats overlap as
/// misconfiguration and picks the highest percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotDealTier {
    pub id: i64,
    pub tier_name: String,
    /// Inclusive lower bound on units sold
    pub min_sold: i64,
    /// Inclusive upper bound; None = open-ended
    pub max_sold: Option<i64>,
    /// Discount percentage (0-100)
    pub discount_percent: f64,
    pub is_active: bool,
}

impl HotDealTier {
    /// Whether `total_sold` falls inside this tier's range.
    pub fn contains(&self, total_sold: i64) -> bool {
        total_sold >= self.min_sold && self.max_sold.is_none_or(|max| total_sold <= max)
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.min_sold < 0 {
            return Err(PricingError::invalid("min_sold must be non-negative"));
        }
        if let Some(max) = self.max_sold
            && max < self.min_sold
        {
            return Err(PricingError::invalid("max_sold is below min_sold"));
        }
        if !self.discount_percent.is_finite()
            || !(0.0..=100.0).contains(&self.discount_percent)
        {
            return Err(PricingError::invalid(
                "discount_percent must be between 0 and 100",
            ));
        }
        Ok(())
    }
}
