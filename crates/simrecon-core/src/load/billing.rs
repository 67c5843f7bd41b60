use crate::domain::{
    normalize_msisdn, normalize_status, parse_price, BillingFrame, BillingRecord, ColumnNames,
    RawTable, Region,
};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingStats {
    pub source: String,
    pub region: Region,
    pub rows: usize,
    pub rejected: usize,
    pub cancelled: usize,
    pub duplicates: usize,
    pub kept: usize,
}

impl BillingStats {
    fn new(source: &str, region: Region) -> Self {
        Self {
            source: source.to_string(),
            region,
            rows: 0,
            rejected: 0,
            cancelled: 0,
            duplicates: 0,
            kept: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingLoad {
    pub frame: BillingFrame,
    pub stats: BillingStats,
}

/// Build the billing frame for one carrier sheet, tagging every row with
/// `region`.
///
/// Rows without a usable identifier and cancelled rows are dropped; exact
/// duplicate tuples collapse to their first occurrence.
pub fn load_billing(
    table: &RawTable,
    region: &Region,
    columns: &ColumnNames,
) -> Result<BillingLoad, CoreError> {
    let ids = table.column(&columns.msisdn)?;
    let prices = table.column(&columns.price)?;
    let statuses = table.column(&columns.status)?;

    let mut frame = BillingFrame::new();
    let mut stats = BillingStats::new(&table.source, region.clone());

    for ((id_cell, price_cell), status_cell) in ids.zip(prices).zip(statuses) {
        stats.rows += 1;
        let id = if id_cell.is_missing() {
            None
        } else {
            normalize_msisdn(&id_cell.to_text())
        };
        let Some(id) = id else {
            stats.rejected += 1;
            continue;
        };

        let record = BillingRecord {
            id,
            price: parse_price(price_cell),
            status: normalize_status(status_cell),
            region: region.clone(),
        };
        if record.is_cancelled() {
            stats.cancelled += 1;
            continue;
        }
        if !frame.push(record) {
            stats.duplicates += 1;
        }
    }

    stats.kept = frame.len();
    Ok(BillingLoad { frame, stats })
}
