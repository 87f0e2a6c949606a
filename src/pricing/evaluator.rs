//! Discount Eligibility Evaluator
//!
//! Decides whether a configured discount applies to an in-progress cart and
//! computes the discount amount. Checks run in a fixed order and the first
//! failure wins, so the UI can tell the cashier exactly why a coupon was
//! turned down.
//!
//! Pure and synchronous: no I/O, no logging, no hidden state. The order API
//! re-runs every check on submission; this result is display state only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingResult;
use crate::models::{Discount, DiscountScope, DiscountType, LineItem};
use crate::money::{to_decimal, to_rupiah};

/// Why a discount was rejected for the current cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    /// Discount is switched off in the admin screen
    Inactive,
    /// `start_date` is still in the future
    NotYetActive,
    /// `end_date` has passed
    Expired,
    /// `used_count` reached `usage_limit`
    UsageLimitReached,
    /// Cart subtotal under `min_order_amount`
    BelowMinimumOrder,
    /// More cart lines than `max_items` allows
    TooManyDistinctItems,
    /// A line exceeds `max_quantity_per_item`
    QuantityExceeded { product_id: i64 },
    /// Product/category-scoped discount with no qualifying line
    NoMatchingItems,
    /// Coupon code not found (engine-level lookup)
    UnknownCode,
}

impl RejectionReason {
    /// Human-readable rejection message for the POS screen.
    pub fn message(&self) -> String {
        match self {
            Self::Inactive => "This discount is not active".to_string(),
            Self::NotYetActive => "This discount has not started yet".to_string(),
            Self::Expired => "This discount has expired".to_string(),
            Self::UsageLimitReached => "This discount has reached its usage limit".to_string(),
            Self::BelowMinimumOrder => "Order total is below the minimum for this discount"
                .to_string(),
            Self::TooManyDistinctItems => {
                "Cart has too many different items for this discount".to_string()
            }
            Self::QuantityExceeded { product_id } => format!(
                "Quantity of product {product_id} exceeds the limit for this discount"
            ),
            Self::NoMatchingItems => "No items in the cart qualify for this discount".to_string(),
            Self::UnknownCode => "Coupon code not found".to_string(),
        }
    }
}

/// Result of evaluating one discount against a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub eligible: bool,
    /// Present exactly when `eligible` is false
    pub reason: Option<RejectionReason>,
    /// Rupiah taken off the order; 0 when not eligible
    pub discount_amount: f64,
}

impl Evaluation {
    pub(crate) fn rejected(reason: RejectionReason) -> Self {
        Self {
            eligible: false,
            reason: Some(reason),
            discount_amount: 0.0,
        }
    }

    fn accepted(discount_amount: f64) -> Self {
        Self {
            eligible: true,
            reason: None,
            discount_amount,
        }
    }
}

/// Evaluate a discount against a cart at time `now`.
///
/// Business rejections come back as `Ok` with `eligible: false`; only
/// malformed input (invariant-violating discount, non-positive quantity,
/// negative price) is an `Err`.
pub fn evaluate(
    cart: &[LineItem],
    discount: &Discount,
    now: DateTime<Utc>,
) -> PricingResult<Evaluation> {
    discount.validate()?;
    for line in cart {
        line.validate()?;
    }

    if !discount.is_active {
        return Ok(Evaluation::rejected(RejectionReason::Inactive));
    }
    if let Some(start) = discount.start_date
        && now < start
    {
        return Ok(Evaluation::rejected(RejectionReason::NotYetActive));
    }
    if let Some(end) = discount.end_date
        && now > end
    {
        return Ok(Evaluation::rejected(RejectionReason::Expired));
    }
    if let Some(limit) = discount.usage_limit
        && discount.used_count >= limit
    {
        return Ok(Evaluation::rejected(RejectionReason::UsageLimitReached));
    }

    let subtotal: Decimal = cart.iter().map(LineItem::subtotal_decimal).sum();
    // boundary inclusive: a cart exactly at the minimum qualifies
    if subtotal < to_decimal(discount.min_order_amount) {
        return Ok(Evaluation::rejected(RejectionReason::BelowMinimumOrder));
    }
    if let Some(max_items) = discount.max_items
        && cart.len() > max_items as usize
    {
        return Ok(Evaluation::rejected(RejectionReason::TooManyDistinctItems));
    }
    if let Some(max_qty) = discount.max_quantity_per_item
        && let Some(line) = cart.iter().find(|l| i64::from(l.quantity) > i64::from(max_qty))
    {
        return Ok(Evaluation::rejected(RejectionReason::QuantityExceeded {
            product_id: line.product_id,
        }));
    }

    let matching: Vec<&LineItem> = matching_lines(cart, discount);
    if discount.discount_scope != DiscountScope::Order && matching.is_empty() {
        return Ok(Evaluation::rejected(RejectionReason::NoMatchingItems));
    }

    let base: Decimal = matching.iter().map(|l| l.subtotal_decimal()).sum();
    let amount = discount_amount(discount, base);

    Ok(Evaluation::accepted(to_rupiah(amount)))
}

/// Lines the discount's scope selects. Order scope selects every line.
fn matching_lines<'a>(cart: &'a [LineItem], discount: &Discount) -> Vec<&'a LineItem> {
    match discount.discount_scope {
        DiscountScope::Order => cart.iter().collect(),
        DiscountScope::Product => cart
            .iter()
            .filter(|l| discount.applies_to_product_ids.contains(&l.product_id))
            .collect(),
        DiscountScope::Category => cart
            .iter()
            .filter(|l| discount.applies_to_category_ids.contains(&l.category_id))
            .collect(),
    }
}

/// Raw discount amount against the eligible base, clamped to the cap and to
/// the base itself (a discount never produces a negative total).
fn discount_amount(discount: &Discount, base: Decimal) -> Decimal {
    let value = to_decimal(discount.value);
    let raw = match discount.discount_type {
        DiscountType::Percentage => base * value / Decimal::ONE_HUNDRED,
        DiscountType::Fixed => value.min(base),
    };
    match discount.max_discount_amount {
        Some(cap) => raw.min(to_decimal(cap)),
        None => raw,
    }
}
