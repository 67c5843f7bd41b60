use crate::domain::{normalize_msisdn, RawTable, TrackedSet};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub source: String,
    pub rows: usize,
    pub rejected: usize,
    pub unique: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLoad {
    pub tracked: TrackedSet,
    pub stats: InventoryStats,
}

/// Collect the canonical ids found in `column` of an inventory table.
///
/// Values the normalizer rejects are skipped; repeated ids collapse.
pub fn load_inventory(table: &RawTable, column: &str) -> Result<InventoryLoad, CoreError> {
    let mut tracked = TrackedSet::new();
    let mut stats = InventoryStats {
        source: table.source.clone(),
        ..InventoryStats::default()
    };

    for cell in table.column(column)? {
        stats.rows += 1;
        if cell.is_missing() {
            stats.rejected += 1;
            continue;
        }
        match normalize_msisdn(&cell.to_text()) {
            Some(id) => {
                tracked.insert(id);
            }
            None => stats.rejected += 1,
        }
    }

    stats.unique = tracked.len();
    Ok(InventoryLoad { tracked, stats })
}
