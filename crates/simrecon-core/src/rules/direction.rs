use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Carrier still bills the SIM but the inventory does not know it.
    BilledUntracked,
    /// Inventory tracks the SIM but no active billing line mentions it.
    TrackedUnbilled,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::BilledUntracked => "billed-untracked",
            Direction::TrackedUnbilled => "tracked-unbilled",
        }
    }

    /// Operator-facing label shown when choosing a comparison mode.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::BilledUntracked => "Telkomsel → Iluvatrack (find unused / still billed)",
            Direction::TrackedUnbilled => "Iluvatrack → Telkomsel (find missing / unbilled)",
        }
    }

    pub fn summary(self, count: usize) -> String {
        match self {
            Direction::BilledUntracked => {
                format!("Found {count} Telkomsel SIMs still billed but not in Iluvatrack.")
            }
            Direction::TrackedUnbilled => {
                format!("Found {count} Iluvatrack SIMs missing from Telkomsel billing.")
            }
        }
    }

    /// Accepts either the short name or the full operator label.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let trimmed = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|direction| direction.as_str() == trimmed || direction.label() == trimmed)
            .ok_or_else(|| CoreError::InvalidDirection(trimmed.to_string()))
    }

    pub const fn all() -> &'static [Direction] {
        &[Direction::BilledUntracked, Direction::TrackedUnbilled]
    }
}
