//! Product Model

use serde::{Deserialize, Serialize};

/// Product catalog read model, trimmed to what pricing needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Category reference
    pub category_id: i64,
    /// Shelf price in rupiah
    pub price: f64,
    /// Cumulative units sold, maintained by order fulfillment
    #[serde(default)]
    pub total_sold: i64,
    pub is_active: bool,
}
