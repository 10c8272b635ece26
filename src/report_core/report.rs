//! Final per-seller report rows

use super::ranker::top_products;
use super::stats::SellerStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

impl SellerReport {
    /// Project ranked stats into a report row, rounding money to cents
    pub fn from_stats(stats: &SellerStats, bonus: f64) -> Self {
        Self {
            seller_id: stats.id.clone(),
            name: stats.name.clone(),
            revenue: round_to_cents(stats.revenue),
            profit: round_to_cents(stats.profit),
            sales_count: stats.sales_count,
            top_products: top_products(stats),
            bonus: round_to_cents(bonus),
        }
    }
}

/// Round to two decimal places, halves away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
