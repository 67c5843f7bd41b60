use crate::rules::{Direction, MismatchResult};
use serde::{Deserialize, Serialize};

pub const BILLED_UNTRACKED_COLUMNS: [&str; 4] = ["phone_number", "price", "status", "region"];
pub const TRACKED_UNBILLED_COLUMNS: [&str; 1] = ["phone_number"];

/// One row of the mismatch report as exported to JSON or a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MismatchRowDto {
    Billed {
        phone_number: String,
        price: i64,
        status: String,
        region: String,
    },
    Tracked {
        phone_number: String,
    },
}

impl MismatchRowDto {
    pub fn phone_number(&self) -> &str {
        match self {
            MismatchRowDto::Billed { phone_number, .. } => phone_number,
            MismatchRowDto::Tracked { phone_number } => phone_number,
        }
    }
}

pub fn report_columns(direction: Direction) -> &'static [&'static str] {
    match direction {
        Direction::BilledUntracked => &BILLED_UNTRACKED_COLUMNS,
        Direction::TrackedUnbilled => &TRACKED_UNBILLED_COLUMNS,
    }
}

pub fn report_rows(result: &MismatchResult) -> Vec<MismatchRowDto> {
    match result {
        MismatchResult::BilledUntracked(records) => records
            .iter()
            .map(|record| MismatchRowDto::Billed {
                phone_number: record.id.to_string(),
                price: record.price,
                status: record.status.clone(),
                region: record.region.to_string(),
            })
            .collect(),
        MismatchResult::TrackedUnbilled(ids) => ids
            .iter()
            .map(|id| MismatchRowDto::Tracked {
                phone_number: id.to_string(),
            })
            .collect(),
    }
}
