//! Pipeline entry points: validate, aggregate, rank, report

use super::aggregator::SalesAggregator;
use super::index::SalesIndex;
use super::models::SalesData;
use super::ranker::rank_by_profit;
use super::report::SellerReport;
use super::strategy::AnalysisOptions;
use super::validator::{validate_sales_data, InvalidInputError};

/// Build the per-seller report, ordered by profit (highest first)
///
/// Fails only on validation, before any aggregation. Records for unknown
/// sellers and line items for unknown SKUs are skipped, not reported.
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, InvalidInputError> {
    validate_sales_data(data)?;

    let mut aggregator = SalesAggregator::new(SalesIndex::build(data), options.calculate_revenue);
    aggregator.add_records(&data.purchase_records);

    let summary = aggregator.summary();
    log::info!(
        "Aggregated {} records ({} skipped), {} line items ({} skipped)",
        summary.records_processed,
        summary.records_skipped,
        summary.items_processed,
        summary.items_skipped
    );

    let ranked = rank_by_profit(aggregator.into_index().into_stats());
    let total = ranked.len();

    let reports: Vec<SellerReport> = ranked
        .iter()
        .enumerate()
        .map(|(rank, stats)| {
            let bonus = (options.calculate_bonus)(rank, total, stats);
            SellerReport::from_stats(stats, bonus)
        })
        .collect();

    if let Some(top) = reports.first() {
        log::info!(
            "Ranked {} sellers, top: {} (profit {:.2}, bonus {:.2})",
            total,
            top.seller_id,
            top.profit,
            top.bonus
        );
    }

    Ok(reports)
}

/// Parse a JSON dataset and run [`analyze_sales_data`] on it
pub fn analyze_json(
    json: &str,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, InvalidInputError> {
    let data = SalesData::from_json(json)?;
    analyze_sales_data(&data, options)
}

pub fn reports_to_json(reports: &[SellerReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
