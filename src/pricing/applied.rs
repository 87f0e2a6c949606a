//! Applied Discount - snapshot of a discount applied to an order

use serde::{Deserialize, Serialize};

use crate::models::{Discount, DiscountScope, DiscountType};

/// Frozen record of one applied discount, for receipts and order previews.
///
/// Carries the discount's identity and configured value alongside the
/// amount actually taken off, so the display survives later edits to the
/// discount record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    pub discount_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub discount_type: DiscountType,
    pub discount_scope: DiscountScope,
    /// Configured value (10 = 10% or Rp 10)
    pub value: f64,
    /// Rupiah actually taken off the order
    pub calculated_amount: f64,
}

impl AppliedDiscount {
    /// Create from a Discount with its calculated amount
    pub fn from_discount(discount: &Discount, calculated_amount: f64) -> Self {
        Self {
            discount_id: discount.id,
            name: discount.name.clone(),
            code: discount.code.clone(),
            discount_type: discount.discount_type,
            discount_scope: discount.discount_scope,
            value: discount.value,
            calculated_amount,
        }
    }
}
