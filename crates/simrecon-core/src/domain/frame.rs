use crate::domain::billing::BillingRecord;
use crate::domain::msisdn::CanonicalId;
use std::collections::{BTreeSet, HashSet};

/// Canonical ids known to the inventory, unioned across every inventory file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedSet {
    ids: BTreeSet<CanonicalId>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the id was already tracked.
    pub fn insert(&mut self, id: CanonicalId) -> bool {
        self.ids.insert(id)
    }

    pub fn union_with(&mut self, other: TrackedSet) {
        self.ids.extend(other.ids);
    }

    pub fn contains(&self, id: &CanonicalId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalId> {
        self.ids.iter()
    }
}

impl FromIterator<CanonicalId> for TrackedSet {
    fn from_iter<I: IntoIterator<Item = CanonicalId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Billing records in load order, free of exact-tuple duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingFrame {
    records: Vec<BillingRecord>,
    seen: HashSet<BillingRecord>,
}

impl BillingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record unless an identical tuple is already present.
    ///
    /// Cancelled records never enter a frame; they are rejected here too.
    pub fn push(&mut self, record: BillingRecord) -> bool {
        if record.is_cancelled() || self.seen.contains(&record) {
            return false;
        }
        self.seen.insert(record.clone());
        self.records.push(record);
        true
    }

    /// Concatenate another frame after this one, keeping its order.
    ///
    /// Returns how many of `other`'s records collapsed into tuples already
    /// present here.
    pub fn append(&mut self, other: BillingFrame) -> usize {
        let mut collapsed = 0;
        for record in other.records {
            if !self.push(record) {
                collapsed += 1;
            }
        }
        collapsed
    }

    pub fn records(&self) -> &[BillingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> HashSet<&CanonicalId> {
        self.records.iter().map(|record| &record.id).collect()
    }
}
