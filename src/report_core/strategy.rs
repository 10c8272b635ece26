//! Pluggable revenue and bonus formulas

use super::models::{LineItem, Product};
use super::stats::SellerStats;
use super::validator::InvalidInputError;

/// Revenue of one line item given its product card
pub type RevenueFn = fn(&LineItem, &Product) -> f64;

/// Bonus for the seller at `rank` (0 = highest profit) out of `total` sellers
pub type BonusFn = fn(usize, usize, &SellerStats) -> f64;

/// `sale_price * quantity * (1 - discount / 100)`
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> f64 {
    item.sale_price * item.quantity as f64 * item.discount_factor()
}

/// Rank-based share of profit
///
/// # Tiers
/// - rank 0: 15%
/// - ranks 1 and 2: 10%
/// - last rank: 0
/// - everyone else: 5%
///
/// Tiers are checked top-down, so with one seller the rank 0 tier wins over
/// the last-rank tier, and with two or three sellers the last one still gets 10%.
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerStats) -> f64 {
    if rank == 0 {
        seller.profit * 0.15
    } else if rank == 1 || rank == 2 {
        seller.profit * 0.1
    } else if rank + 1 == total {
        0.0
    } else {
        seller.profit * 0.05
    }
}

#[derive(Clone, Copy)]
pub struct AnalysisOptions {
    pub calculate_revenue: RevenueFn,
    pub calculate_bonus: BonusFn,
}

impl AnalysisOptions {
    pub fn new(calculate_revenue: RevenueFn, calculate_bonus: BonusFn) -> Self {
        Self {
            calculate_revenue,
            calculate_bonus,
        }
    }

    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(calculate_simple_revenue, calculate_bonus_by_profit)
    }
}

/// Collects strategies one at a time; both are required by `build`
#[derive(Clone, Copy, Default)]
pub struct AnalysisOptionsBuilder {
    calculate_revenue: Option<RevenueFn>,
    calculate_bonus: Option<BonusFn>,
}

impl AnalysisOptionsBuilder {
    pub fn calculate_revenue(mut self, f: RevenueFn) -> Self {
        self.calculate_revenue = Some(f);
        self
    }

    pub fn calculate_bonus(mut self, f: BonusFn) -> Self {
        self.calculate_bonus = Some(f);
        self
    }

    pub fn build(self) -> Result<AnalysisOptions, InvalidInputError> {
        let calculate_revenue = self
            .calculate_revenue
            .ok_or(InvalidInputError::MissingStrategy("calculate_revenue"))?;
        let calculate_bonus = self
            .calculate_bonus
            .ok_or(InvalidInputError::MissingStrategy("calculate_bonus"))?;

        Ok(AnalysisOptions::new(calculate_revenue, calculate_bonus))
    }
}
