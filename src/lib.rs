//! SalesFlow - per-seller sales performance reports
//!
//! Folds purchase records into per-seller revenue, profit and sales counts,
//! ranks sellers by profit and assigns rank-based bonuses.
//! See [`report_core`] for the pipeline stages.

pub mod report_core;

pub use report_core::{
    analyze_json, analyze_sales_data, reports_to_json, AnalysisOptions, InvalidInputError,
    SalesData, SellerReport,
};
