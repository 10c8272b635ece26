//! Profit ranking and per-seller top products

use super::report::TopProduct;
use super::stats::SellerStats;
use std::cmp::Ordering;

pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sort sellers by profit, highest first
///
/// The sort is stable: sellers with equal profit keep their incoming order.
pub fn rank_by_profit(mut stats: Vec<SellerStats>) -> Vec<SellerStats> {
    stats.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    stats
}

/// Up to [`TOP_PRODUCTS_LIMIT`] SKUs by quantity sold, highest first.
/// Equal quantities keep the order the SKUs were first sold in.
pub fn top_products(stats: &SellerStats) -> Vec<TopProduct> {
    let mut sold: Vec<&(String, i64)> = stats.products_sold().iter().collect();
    sold.sort_by(|a, b| b.1.cmp(&a.1));

    sold.into_iter()
        .take(TOP_PRODUCTS_LIMIT)
        .map(|(sku, quantity)| TopProduct {
            sku: sku.clone(),
            quantity: *quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_core::models::Seller;

    fn create_test_stats(id: &str, profit: f64) -> SellerStats {
        let mut stats = SellerStats::new(&Seller {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
        });
        stats.profit = profit;
        stats
    }

    fn ids(stats: &[SellerStats]) -> Vec<&str> {
        stats.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_rank_by_profit_descending() {
        let ranked = rank_by_profit(vec![
            create_test_stats("low", 10.0),
            create_test_stats("high", 300.0),
            create_test_stats("negative", -5.0),
            create_test_stats("mid", 120.0),
        ]);

        assert_eq!(ids(&ranked), vec!["high", "mid", "low", "negative"]);
    }

    #[test]
    fn test_rank_ties_keep_seller_order() {
        let ranked = rank_by_profit(vec![
            create_test_stats("a", 50.0),
            create_test_stats("b", 100.0),
            create_test_stats("c", 50.0),
            create_test_stats("d", 100.0),
        ]);

        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_products_sorted_and_limited() {
        let mut stats = create_test_stats("s1", 0.0);
        for i in 0..12 {
            stats.add_line(&format!("SKU_{:03}", i), i + 1, 0.0, 0.0);
        }

        let top = top_products(&stats);

        assert_eq!(top.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(top[0].sku, "SKU_011");
        assert_eq!(top[0].quantity, 12);
        assert_eq!(top[9].sku, "SKU_002");
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
    }

    #[test]
    fn test_top_products_ties_keep_first_sold_order() {
        let mut stats = create_test_stats("s1", 0.0);
        stats.add_line("B", 2, 0.0, 0.0);
        stats.add_line("A", 5, 0.0, 0.0);
        stats.add_line("C", 2, 0.0, 0.0);
        stats.add_line("D", 1, 0.0, 0.0);
        stats.add_line("D", 1, 0.0, 0.0);

        let skus: Vec<String> = top_products(&stats).into_iter().map(|p| p.sku).collect();

        assert_eq!(skus, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_top_products_empty() {
        assert!(top_products(&create_test_stats("s1", 0.0)).is_empty());
    }
}
