//! Per-seller running totals, mutated while purchase records are folded in

use super::models::Seller;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    products_sold: Vec<(String, i64)>,
    product_positions: HashMap<String, usize>,
}

impl SellerStats {
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            product_positions: HashMap::new(),
        }
    }

    /// Count one purchase record, however many line items it carries
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    pub fn add_line(&mut self, sku: &str, quantity: i64, revenue: f64, profit: f64) {
        self.revenue += revenue;
        self.profit += profit;

        match self.product_positions.get(sku) {
            Some(&pos) => self.products_sold[pos].1 += quantity,
            None => {
                self.product_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push((sku.to_string(), quantity));
            }
        }
    }

    /// Accumulated quantity per SKU, in the order each SKU was first sold
    pub fn products_sold(&self) -> &[(String, i64)] {
        &self.products_sold
    }

    pub fn quantity_sold(&self, sku: &str) -> Option<i64> {
        self.product_positions
            .get(sku)
            .map(|&pos| self.products_sold[pos].1)
    }
}
