//! Lookup indexes for sellers and products

use super::models::{Product, SalesData};
use super::stats::SellerStats;
use std::collections::HashMap;

/// Seller id → position in `stats`, and SKU → product.
///
/// `stats` keeps the seller list order; it is the order ties fall back on
/// when ranking.
pub struct SalesIndex<'a> {
    stats: Vec<SellerStats>,
    sellers: HashMap<String, usize>,
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> SalesIndex<'a> {
    pub fn build(data: &'a SalesData) -> Self {
        let stats: Vec<SellerStats> = data.sellers.iter().map(SellerStats::new).collect();

        // A repeated id resolves to its last occurrence, same for SKUs
        let sellers = stats
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.id.clone(), pos))
            .collect();

        let products = data
            .products
            .iter()
            .map(|p| (p.sku.as_str(), p))
            .collect();

        Self {
            stats,
            sellers,
            products,
        }
    }

    pub fn seller_position(&self, seller_id: &str) -> Option<usize> {
        self.sellers.get(seller_id).copied()
    }

    pub fn seller_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        let pos = self.seller_position(seller_id)?;
        self.stats.get_mut(pos)
    }

    /// Panics if `pos` did not come from `seller_position`
    pub fn stats_at_mut(&mut self, pos: usize) -> &mut SellerStats {
        &mut self.stats[pos]
    }

    pub fn seller(&self, seller_id: &str) -> Option<&SellerStats> {
        self.sellers.get(seller_id).map(|&pos| &self.stats[pos])
    }

    pub fn product(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn seller_count(&self) -> usize {
        self.stats.len()
    }

    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}
