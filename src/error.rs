//! Pricing error types
//!
//! Only caller defects are errors here. Business-rule rejections (expired
//! coupon, cart below minimum, ...) are expected outcomes and travel as
//! [`RejectionReason`](crate::pricing::RejectionReason) data on an
//! ineligible evaluation, never as `Err`.

use thiserror::Error;

/// Error raised for malformed input: negative quantities, out-of-range
/// percentages, scope/target-list mismatches and the like.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PricingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
