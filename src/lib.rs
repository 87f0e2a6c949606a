//! Pricing core for the Warung POS
//!
//! Pure, synchronous promotion logic shared by the POS and online-ordering
//! frontends: discount/coupon eligibility evaluation and hot-deal tier
//! resolution. The crate owns no I/O; callers fetch discounts, tiers and
//! catalog data from the order API and pass the decoded models in.
//!
//! Everything computed here is advisory display state. The order API
//! re-validates discounts and increments usage counters on submission;
//! client-side approval is never authorization.

pub mod error;
pub mod models;
pub mod money;
pub mod pricing;

// Re-exports
pub use error::{PricingError, PricingResult};
pub use models::{
    Discount, DiscountScope, DiscountType, HotDealTier, LineItem, Product, cart_subtotal,
};
pub use pricing::{
    AppliedDiscount, Evaluation, HotDealPrice, PromotionEngine, RejectionReason,
    discounted_price, evaluate, resolve_tier,
};
