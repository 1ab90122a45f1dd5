//! In-memory record store.

use std::collections::BTreeMap;

use census_model::{EntityKind, Record};

use crate::{RecordStore, StoreError};

/// Ordered in-memory store keyed by `(kind, id)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    records: BTreeMap<(EntityKind, String), Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of `kind` in id order.
    pub fn records(&self, kind: EntityKind) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |((k, _), _)| *k == kind)
            .map(|(_, record)| record)
    }

    /// Record counts per kind, omitting empty kinds.
    pub fn counts(&self) -> BTreeMap<EntityKind, usize> {
        let mut counts = BTreeMap::new();
        for (kind, _) in self.records.keys() {
            *counts.entry(*kind).or_insert(0) += 1;
        }
        counts
    }
}

impl RecordStore for MemoryStore {
    fn upsert(&mut self, record: &Record) -> Result<(), StoreError> {
        self.records
            .insert((record.kind(), record.id().to_string()), record.clone());
        Ok(())
    }

    /// The whole batch is staged before the merge.
    fn upsert_all(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let staged: BTreeMap<_, _> = records
            .iter()
            .map(|record| ((record.kind(), record.id().to_string()), record.clone()))
            .collect();
        self.records.extend(staged);
        Ok(())
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        Ok(self.records(kind).count())
    }

    fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self.records.get(&(kind, id.to_string())).cloned())
    }
}

#[cfg(test)]
mod tests {
    use census_model::{DeathRecord, HouseholdRecord};

    use super::*;

    fn household(id: &str, ward: i64) -> Record {
        HouseholdRecord {
            id: id.to_string(),
            ward_no: Some(ward),
            ..HouseholdRecord::default()
        }
        .into()
    }

    #[test]
    fn upsert_overwrites_by_id() {
        let mut store = MemoryStore::new();
        store.upsert(&household("h1", 1)).unwrap();
        store.upsert(&household("h1", 2)).unwrap();
        assert_eq!(store.count(EntityKind::Household).unwrap(), 1);
        assert_eq!(
            store.get(EntityKind::Household, "h1").unwrap(),
            Some(household("h1", 2))
        );
    }

    #[test]
    fn same_id_in_different_kinds_is_distinct() {
        let mut store = MemoryStore::new();
        let death = DeathRecord {
            id: "h1".to_string(),
            household_id: "h1".to_string(),
            ..DeathRecord::default()
        };
        store
            .upsert_all(&[household("h1", 1), death.into()])
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.counts().get(&EntityKind::Death), Some(&1));
    }

    #[test]
    fn batch_merges_into_existing_records() {
        let mut store = MemoryStore::new();
        store.upsert(&household("h1", 1)).unwrap();
        store.upsert(&household("h2", 2)).unwrap();
        store
            .upsert_all(&[household("h2", 5), household("h3", 3), household("h3", 4)])
            .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(EntityKind::Household, "h1").unwrap(), Some(household("h1", 1)));
        assert_eq!(store.get(EntityKind::Household, "h2").unwrap(), Some(household("h2", 5)));
        assert_eq!(store.get(EntityKind::Household, "h3").unwrap(), Some(household("h3", 4)));
    }
}
