use crate::domain::{BillingFrame, ColumnNames, RawTable, Region, TrackedSet};
use crate::error::CoreError;
use crate::load::{load_billing, load_inventory, BillingLoad, BillingStats, InventoryStats};
use crate::rules::{reconcile, Direction, MismatchResult};

/// Minimum number of regional billing sheets a comparison needs.
pub const REQUIRED_BILLING_SOURCES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct BillingSource {
    pub table: RawTable,
    pub region: Region,
}

impl BillingSource {
    pub fn new(table: RawTable, region: Region) -> Self {
        Self { table, region }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub result: MismatchResult,
    /// Distinct canonical ids across every inventory table.
    pub tracked: usize,
    pub inventory: Vec<InventoryStats>,
    pub billing: Vec<BillingStats>,
}

/// Run one reconciliation over already-read tables.
///
/// Inventory tables are unioned, billing tables are concatenated in the
/// given order. The first table that fails to load aborts the run.
pub fn compare(
    direction: Direction,
    inventory: &[RawTable],
    billing: &[BillingSource],
    columns: &ColumnNames,
) -> Result<Comparison, CoreError> {
    ensure_inputs(inventory, billing)?;

    let mut tracked = TrackedSet::new();
    let mut inventory_stats = Vec::with_capacity(inventory.len());
    for table in inventory {
        let load = load_inventory(table, &columns.sim_card)?;
        tracked.union_with(load.tracked);
        inventory_stats.push(load.stats);
    }

    let mut frame = BillingFrame::new();
    let mut billing_stats = Vec::with_capacity(billing.len());
    for source in billing {
        let BillingLoad {
            frame: loaded,
            mut stats,
        } = load_billing(&source.table, &source.region, columns)?;
        // Tuples already contributed by an earlier source count against this one.
        let collapsed = frame.append(loaded);
        stats.duplicates += collapsed;
        stats.kept -= collapsed;
        billing_stats.push(stats);
    }

    Ok(Comparison {
        result: reconcile(direction, &tracked, &frame),
        tracked: tracked.len(),
        inventory: inventory_stats,
        billing: billing_stats,
    })
}

fn ensure_inputs(inventory: &[RawTable], billing: &[BillingSource]) -> Result<(), CoreError> {
    if inventory.is_empty() {
        return Err(CoreError::MissingInput(
            "at least one inventory file is required".to_string(),
        ));
    }
    if billing.len() < REQUIRED_BILLING_SOURCES {
        return Err(CoreError::MissingInput(format!(
            "{REQUIRED_BILLING_SOURCES} regional billing files are required, got {}",
            billing.len()
        )));
    }
    Ok(())
}
