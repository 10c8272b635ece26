//! Folds purchase records into per-seller running totals

use super::index::SalesIndex;
use super::models::PurchaseRecord;
use super::strategy::RevenueFn;

/// Counters describing what the fold used and what it skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    pub records_processed: usize,
    pub records_skipped: usize,
    pub items_processed: usize,
    pub items_skipped: usize,
}

pub struct SalesAggregator<'a> {
    index: SalesIndex<'a>,
    calculate_revenue: RevenueFn,
    summary: AggregationSummary,
}

impl<'a> SalesAggregator<'a> {
    pub fn new(index: SalesIndex<'a>, calculate_revenue: RevenueFn) -> Self {
        Self {
            index,
            calculate_revenue,
            summary: AggregationSummary::default(),
        }
    }

    /// Fold one purchase record into its seller's stats
    ///
    /// Records with an unknown seller are skipped whole and not counted.
    /// A known seller's sales count goes up once per record, even when none of
    /// its line items reference a known product.
    pub fn add_record(&mut self, record: &PurchaseRecord) {
        let receipt = record.receipt_id.as_deref().unwrap_or("<no receipt>");

        let Some(pos) = self.index.seller_position(&record.seller_id) else {
            log::debug!(
                "Skipping record {}: unknown seller {}",
                receipt,
                record.seller_id
            );
            self.summary.records_skipped += 1;
            return;
        };

        self.index.stats_at_mut(pos).record_sale();
        self.summary.records_processed += 1;

        for item in &record.items {
            let Some(product) = self.index.product(&item.sku) else {
                log::debug!(
                    "Skipping line item in record {}: unknown sku {}",
                    receipt,
                    item.sku
                );
                self.summary.items_skipped += 1;
                continue;
            };

            let revenue = (self.calculate_revenue)(item, product);
            let cost = product.purchase_price * item.quantity as f64;

            self.index
                .stats_at_mut(pos)
                .add_line(&item.sku, item.quantity, revenue, revenue - cost);
            self.summary.items_processed += 1;
        }
    }

    pub fn add_records(&mut self, records: &[PurchaseRecord]) {
        for record in records {
            self.add_record(record);
        }
    }

    pub fn summary(&self) -> AggregationSummary {
        self.summary
    }

    pub fn index(&self) -> &SalesIndex<'a> {
        &self.index
    }

    pub fn into_index(self) -> SalesIndex<'a> {
        self.index
    }
}
