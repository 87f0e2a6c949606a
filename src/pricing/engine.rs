//! Promotion Engine
//!
//! Wraps the pure evaluator and resolver over snapshots of the fetched
//! discount and tier lists for the POS screens: coupon entry, the discount
//! picker, and the catalog's hot-deal preview column. This is the only
//! layer that logs; the functions underneath stay referentially
//! transparent.

use chrono::{DateTime, Utc};

use crate::error::PricingResult;
use crate::models::{Discount, HotDealTier, LineItem, Product};

use super::applied::AppliedDiscount;
use super::evaluator::{Evaluation, RejectionReason, evaluate};
use super::resolver::{discounted_price, resolve_tier};

/// Hot-deal preview row for one catalog product
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HotDealPrice {
    pub product_id: i64,
    pub tier_id: i64,
    pub tier_name: String,
    pub discount_percent: f64,
    pub original_price: f64,
    pub discounted_price: f64,
}

/// Promotion engine over fetched discount/tier snapshots
#[derive(Debug, Clone, Default)]
pub struct PromotionEngine {
    discounts: Vec<Discount>,
    tiers: Vec<HotDealTier>,
}

impl PromotionEngine {
    pub fn new(discounts: Vec<Discount>, tiers: Vec<HotDealTier>) -> Self {
        Self { discounts, tiers }
    }

    /// Look up a coupon code (case-insensitive) and evaluate it.
    ///
    /// An unknown code is a business rejection, not an error, so the POS
    /// shows "coupon not found" instead of failing.
    pub fn apply_code(
        &self,
        cart: &[LineItem],
        code: &str,
        now: DateTime<Utc>,
    ) -> PricingResult<Evaluation> {
        let Some(discount) = self.discounts.iter().find(|d| d.matches_code(code)) else {
            tracing::debug!(code, "coupon code not found");
            return Ok(Evaluation::rejected(RejectionReason::UnknownCode));
        };
        self.evaluate_snapshot(cart, discount, now)
    }

    /// Evaluate one listed discount by id (the cashier's discount picker).
    /// Unknown ids fall back to `UnknownCode` like a missing coupon.
    pub fn evaluate_discount(
        &self,
        cart: &[LineItem],
        discount_id: i64,
        now: DateTime<Utc>,
    ) -> PricingResult<Evaluation> {
        let Some(discount) = self.discounts.iter().find(|d| d.id == discount_id) else {
            tracing::debug!(discount_id, "discount not in snapshot");
            return Ok(Evaluation::rejected(RejectionReason::UnknownCode));
        };
        self.evaluate_snapshot(cart, discount, now)
    }

    fn evaluate_snapshot(
        &self,
        cart: &[LineItem],
        discount: &Discount,
        now: DateTime<Utc>,
    ) -> PricingResult<Evaluation> {
        let evaluation = evaluate(cart, discount, now)?;
        if let Some(reason) = &evaluation.reason {
            tracing::debug!(
                discount_id = discount.id,
                reason = ?reason,
                "discount rejected for cart"
            );
        }
        Ok(evaluation)
    }

    /// Build the receipt snapshot for an eligible evaluation.
    pub fn applied(
        &self,
        discount_id: i64,
        evaluation: &Evaluation,
    ) -> Option<AppliedDiscount> {
        if !evaluation.eligible {
            return None;
        }
        self.discounts
            .iter()
            .find(|d| d.id == discount_id)
            .map(|d| AppliedDiscount::from_discount(d, evaluation.discount_amount))
    }

    /// Hot-deal preview for one product, if a tier currently applies.
    pub fn hot_deal_price(&self, product: &Product) -> PricingResult<Option<HotDealPrice>> {
        let Some(tier) = resolve_tier(product.total_sold, &self.tiers)? else {
            return Ok(None);
        };

        let overlapping = self
            .tiers
            .iter()
            .filter(|t| t.is_active && t.contains(product.total_sold))
            .count();
        if overlapping > 1 {
            tracing::warn!(
                product_id = product.id,
                total_sold = product.total_sold,
                "multiple active hot-deal tiers match; applying highest percentage"
            );
        }
        Ok(Some(HotDealPrice {
            product_id: product.id,
            tier_id: tier.id,
            tier_name: tier.tier_name.clone(),
            discount_percent: tier.discount_percent,
            original_price: product.price,
            discounted_price: discounted_price(product.price, tier),
        }))
    }

    /// Hot-deal preview rows for a product listing. Products without a
    /// matching tier are skipped.
    pub fn price_preview(&self, products: &[Product]) -> PricingResult<Vec<HotDealPrice>> {
        let mut rows = Vec::with_capacity(products.len());
        for product in products {
            if let Some(row) = self.hot_deal_price(product)? {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscountScope, DiscountType};

    fn now() -> DateTime<Utc> {
        "2026-06-15T12:00:00Z".parse().unwrap()
    }

    fn coupon(id: i64, code: &str, value: f64) -> Discount {
        Discount {
            id,
            code: Some(code.to_string()),
            name: format!("Coupon {code}"),
            discount_type: DiscountType::Percentage,
            discount_scope: DiscountScope::Order,
            value,
            min_order_amount: 0.0,
            max_discount_amount: None,
            usage_limit: None,
            used_count: 0,
            max_items: None,
            max_quantity_per_item: None,
            start_date: None,
            end_date: None,
            is_active: true,
            applies_to_product_ids: vec![],
            applies_to_category_ids: vec![],
        }
    }

    fn tier(id: i64, min_sold: i64, max_sold: Option<i64>, pct: f64) -> HotDealTier {
        HotDealTier {
            id,
            tier_name: format!("tier-{id}"),
            min_sold,
            max_sold,
            discount_percent: pct,
            is_active: true,
        }
    }

    fn product(id: i64, price: f64, total_sold: i64) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            category_id: 1,
            price,
            total_sold,
            is_active: true,
        }
    }

    #[test]
    fn test_apply_code_case_insensitive() {
        let engine = PromotionEngine::new(vec![coupon(1, "HEMAT10", 10.0)], vec![]);
        let cart = vec![LineItem::new(1, 1, 1, 100_000.0)];
        let eval = engine.apply_code(&cart, "hemat10", now()).unwrap();
        assert!(eval.eligible);
        assert_eq!(eval.discount_amount, 10_000.0);
    }

    #[test]
    fn test_apply_unknown_code() {
        let engine = PromotionEngine::new(vec![coupon(1, "HEMAT10", 10.0)], vec![]);
        let cart = vec![LineItem::new(1, 1, 1, 100_000.0)];
        let eval = engine.apply_code(&cart, "NOPE", now()).unwrap();
        assert!(!eval.eligible);
        assert_eq!(eval.reason, Some(RejectionReason::UnknownCode));
    }

    #[test]
    fn test_evaluate_discount_by_id() {
        let engine = PromotionEngine::new(vec![coupon(7, "X", 5.0)], vec![]);
        let cart = vec![LineItem::new(1, 1, 2, 10_000.0)];
        let eval = engine.evaluate_discount(&cart, 7, now()).unwrap();
        assert!(eval.eligible);
        assert_eq!(eval.discount_amount, 1_000.0);

        let missing = engine.evaluate_discount(&cart, 99, now()).unwrap();
        assert_eq!(missing.reason, Some(RejectionReason::UnknownCode));
    }

    #[test]
    fn test_applied_snapshot_only_when_eligible() {
        let engine = PromotionEngine::new(vec![coupon(7, "X", 5.0)], vec![]);
        let cart = vec![LineItem::new(1, 1, 2, 10_000.0)];
        let eval = engine.evaluate_discount(&cart, 7, now()).unwrap();
        let applied = engine.applied(7, &eval).unwrap();
        assert_eq!(applied.calculated_amount, 1_000.0);

        let rejected = Evaluation::rejected(RejectionReason::Inactive);
        assert!(engine.applied(7, &rejected).is_none());
    }

    #[test]
    fn test_price_preview_skips_unmatched_products() {
        let tiers = vec![tier(1, 10, Some(49), 10.0), tier(2, 50, None, 20.0)];
        let engine = PromotionEngine::new(vec![], tiers);
        let products = vec![
            product(1, 37_500.0, 12),
            product(2, 20_000.0, 3), // below every tier
            product(3, 10_000.0, 80),
        ];
        let rows = engine.price_preview(&products).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_id, 1);
        assert_eq!(rows[0].discounted_price, 33_800.0);
        assert_eq!(rows[1].product_id, 3);
        assert_eq!(rows[1].discount_percent, 20.0);
        assert_eq!(rows[1].discounted_price, 8_000.0);
    }
}
