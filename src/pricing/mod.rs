//! Promotion Pricing Module
//!
//! Discount eligibility evaluation and hot-deal tier resolution. The
//! evaluator and resolver are pure functions; [`PromotionEngine`] wraps
//! them over fetched discount/tier snapshots for the POS screens.

mod applied;
mod engine;
mod evaluator;
mod resolver;

pub use applied::*;
pub use engine::*;
pub use evaluator::*;
pub use resolver::*;
