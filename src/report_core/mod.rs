//! Report Core - Seller Performance Pipeline
//!
//! Turns a sales dataset (sellers, products, purchase records) into a ranked
//! per-seller report in a single synchronous pass.
//!
//! # Architecture
//!
//! ```text
//! SalesData → validator (fail fast, InvalidInputError)
//!     ↓
//! SalesIndex (seller id → SellerStats, sku → Product)
//!     ↓
//! SalesAggregator (fold purchase records, skip unknown refs)
//!     ↓
//! rank_by_profit → calculate_bonus + top_products
//!     ↓
//! SellerReport (rounded to cents)
//! ```
//!
//! Revenue and bonus formulas are injected through [`AnalysisOptions`].

pub mod aggregator;
pub mod analyzer;
pub mod index;
pub mod models;
pub mod ranker;
pub mod report;
pub mod stats;
pub mod strategy;
pub mod validator;

pub use aggregator::{AggregationSummary, SalesAggregator};
pub use analyzer::{analyze_json, analyze_sales_data, reports_to_json};
pub use index::SalesIndex;
pub use models::{LineItem, Product, PurchaseRecord, SalesData, Seller};
pub use ranker::{rank_by_profit, top_products, TOP_PRODUCTS_LIMIT};
pub use report::{round_to_cents, SellerReport, TopProduct};
pub use stats::SellerStats;
pub use strategy::{
    calculate_bonus_by_profit, calculate_simple_revenue, AnalysisOptions, AnalysisOptionsBuilder,
    BonusFn, RevenueFn,
};
pub use validator::{validate_raw_dataset, validate_sales_data, InvalidInputError};
