//! Discount Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// `value` is a percentage of the eligible base (0-100)
    Percentage,
    /// `value` is a rupiah amount
    Fixed,
}

/// Discount scope enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountScope {
    /// Applies to the whole cart
    Order,
    /// Applies to lines whose product is in `applies_to_product_ids`
    Product,
    /// Applies to lines whose category is in `applies_to_category_ids`
    Category,
}

/// Discount entity as configured in the admin screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    /// Coupon code, matched case-insensitively. None = automatic discount.
    pub code: Option<String>,
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_scope: DiscountScope,
    /// Percentage (0-100) or rupiah amount, per `discount_type`
    pub value: f64,
    /// Minimum cart subtotal, inclusive
    #[serde(default)]
    pub min_order_amount: f64,
    /// Cap on the computed amount; None = unbounded
    pub max_discount_amount: Option<f64>,
    /// Total redemptions allowed; None = unlimited
    pub usage_limit: Option<u32>,
    /// Redemptions so far, maintained server-side
    #[serde(default)]
    pub used_count: u32,
    /// Cap on distinct cart lines
    pub max_items: Option<u32>,
    /// Cap on the quantity of any single line
    pub max_quantity_per_item: Option<u32>,
    /// Activity window, inclusive on both ends
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    /// Populated only when `discount_scope` is `product`
    #[serde(default)]
    pub applies_to_product_ids: Vec<i64>,
    /// Populated only when `discount_scope` is `category`
    #[serde(default)]
    pub applies_to_category_ids: Vec<i64>,
}

impl Discount {
    /// Case-insensitive coupon code match. Automatic discounts (no code)
    /// never match.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code
            .as_deref()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case(code.trim()))
    }

    /// Check field ranges and scope/target-list consistency.
    ///
    /// Exactly the target list matching the scope may be populated: a
    /// product-scoped discount needs product IDs and no category IDs, and
    /// vice versa; an order-scoped discount carries neither.
    pub fn validate(&self) -> PricingResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(PricingError::invalid("discount value must be non-negative"));
        }
        if self.discount_type == DiscountType::Percentage && self.value > 100.0 {
            return Err(PricingError::invalid(
                "percentage discount value must be at most 100",
            ));
        }
        if !self.min_order_amount.is_finite() || self.min_order_amount < 0.0 {
            return Err(PricingError::invalid(
                "min_order_amount must be non-negative",
            ));
        }
        if let Some(cap) = self.max_discount_amount
            && (!cap.is_finite() || cap < 0.0)
        {
            return Err(PricingError::invalid(
                "max_discount_amount must be non-negative",
            ));
        }
        if self.usage_limit == Some(0) {
            return Err(PricingError::invalid("usage_limit must be positive"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(PricingError::invalid("start_date is after end_date"));
        }

        let has_products = !self.applies_to_product_ids.is_empty();
        let has_categories = !self.applies_to_category_ids.is_empty();
        let consistent = match self.discount_scope {
            DiscountScope::Order => !has_products && !has_categories,
            DiscountScope::Product => has_products && !has_categories,
            DiscountScope::Category => has_categories && !has_products,
        };
        if !consistent {
            return Err(PricingError::invalid(
                "target lists do not match discount_scope",
            ));
        }
        Ok(())
    }
}
