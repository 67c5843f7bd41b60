use crate::domain::{BillingFrame, BillingRecord, CanonicalId, TrackedSet};
use crate::rules::direction::Direction;

/// Terminal output of a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchResult {
    /// Billing records whose id the inventory does not track, in frame order.
    BilledUntracked(Vec<BillingRecord>),
    /// Tracked ids with no billing record of any region, ascending.
    TrackedUnbilled(Vec<CanonicalId>),
}

impl MismatchResult {
    pub fn direction(&self) -> Direction {
        match self {
            MismatchResult::BilledUntracked(_) => Direction::BilledUntracked,
            MismatchResult::TrackedUnbilled(_) => Direction::TrackedUnbilled,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MismatchResult::BilledUntracked(records) => records.len(),
            MismatchResult::TrackedUnbilled(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn reconcile(
    direction: Direction,
    tracked: &TrackedSet,
    billing: &BillingFrame,
) -> MismatchResult {
    match direction {
        Direction::BilledUntracked => MismatchResult::BilledUntracked(
            billing
                .records()
                .iter()
                .filter(|record| !tracked.contains(&record.id))
                .cloned()
                .collect(),
        ),
        Direction::TrackedUnbilled => {
            let billed = billing.ids();
            MismatchResult::TrackedUnbilled(
                tracked
                    .iter()
                    .filter(|id| !billed.contains(id))
                    .cloned()
                    .collect(),
            )
        }
    }
}
