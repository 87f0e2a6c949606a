//! Hot-Deal Tier Resolver
//!
//! Maps a product's cumulative units sold onto the configured tier ladder
//! and derives the discounted shelf price.

use rust_decimal::Decimal;

use crate::error::{PricingError, PricingResult};
use crate::models::HotDealTier;
use crate::money::{round_to_hundred, to_decimal};

/// Resolve the tier that applies at `total_sold`.
///
/// Only active tiers are considered; both bounds are inclusive. When
/// overlapping tiers match (admin misconfiguration), the highest
/// `discount_percent` wins. No matching tier is `Ok(None)`; a negative
/// `total_sold` is a caller bug and comes back as `InvalidInput`.
pub fn resolve_tier<'a>(
    total_sold: i64,
    tiers: &'a [HotDealTier],
) -> PricingResult<Option<&'a HotDealTier>> {
    if total_sold < 0 {
        return Err(PricingError::invalid(format!(
            "total_sold must be non-negative, got {total_sold}"
        )));
    }
    for tier in tiers {
        tier.validate()?;
    }

    Ok(tiers
        .iter()
        .filter(|t| t.is_active && t.contains(total_sold))
        .max_by(|a, b| {
            a.discount_percent
                .partial_cmp(&b.discount_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        }))
}

/// Discounted shelf price for a tier: `price * (1 - percent/100)`, rounded
/// half-up to the nearest 100 rupiah (e.g. 37500 at 10% → 33750 → 33800).
pub fn discounted_price(price: f64, tier: &HotDealTier) -> f64 {
    let pct = to_decimal(tier.discount_percent);
    let multiplier = Decimal::ONE - pct / Decimal::ONE_HUNDRED;
    round_to_hundred(to_decimal(price) * multiplier)
}
