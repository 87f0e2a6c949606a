//! Data models
//!
//! Read models for the order-API payloads the pricing code consumes.
//! Field names follow the wire shape (snake_case, lowercase enum values).
//! All IDs are `i64`.

pub mod cart;
pub mod discount;
pub mod hot_deal;
pub mod product;

// Re-exports
pub use cart::*;
pub use discount::*;
pub use hot_deal::*;
pub use product::*;
