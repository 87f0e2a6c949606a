//! Cart Model
//!
//! Ephemeral POS cart lines, built client-side from product and modifier
//! picks and discarded on submit or abandonment. The subtotal is derived,
//! never stored, so a line cannot drift from its own quantity and price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::money::{to_decimal, to_rupiah};

/// One line of an in-progress order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub product_id: i64,
    pub category_id: i64,
    pub quantity: i32,
    /// Unit price after modifier selection, in rupiah
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(product_id: i64, category_id: i64, quantity: i32, unit_price: f64) -> Self {
        Self {
            product_id,
            category_id,
            quantity,
            unit_price,
        }
    }

    /// Line subtotal (`quantity * unit_price`), rounded to whole rupiah.
    pub fn subtotal(&self) -> f64 {
        to_rupiah(self.subtotal_decimal())
    }

    pub(crate) fn subtotal_decimal(&self) -> Decimal {
        Decimal::from(self.quantity) * to_decimal(self.unit_price)
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.quantity <= 0 {
            return Err(PricingError::invalid(format!(
                "line for product {} has non-positive quantity {}",
                self.product_id, self.quantity
            )));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(PricingError::invalid(format!(
                "line for product {} has invalid unit price",
                self.product_id
            )));
        }
        Ok(())
    }
}

/// Sum of line subtotals, rounded to whole rupiah.
pub fn cart_subtotal(cart: &[LineItem]) -> f64 {
    to_rupiah(cart.iter().map(LineItem::subtotal_decimal).sum())
}
