//! The mapping abstractions the scheduler reads from and writes to.
//!
//! The record store is owned by the host application. The scheduler needs
//! get-by-key and a presence test for queries, plus insert and remove for the
//! review and reset helpers. It never dictates a storage format.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::StudyRecord;

/// A learner's whole progress, keyed by item id.
pub type StudyProgress = BTreeMap<String, StudyRecord>;

/// Read access to a learner's records.
pub trait RecordStore {
    fn record(&self, item: &str) -> Option<&StudyRecord>;

    fn contains(&self, item: &str) -> bool {
        self.record(item).is_some()
    }
}

/// Write access to a learner's records.
pub trait RecordStoreMut: RecordStore {
    fn put(&mut self, item: &str, record: StudyRecord);

    fn delete(&mut self, item: &str) -> Option<StudyRecord>;
}

impl<S: BuildHasher> RecordStore for HashMap<String, StudyRecord, S> {
    fn record(&self, item: &str) -> Option<&StudyRecord> {
        self.get(item)
    }
}

impl<S: BuildHasher> RecordStoreMut for HashMap<String, StudyRecord, S> {
    fn put(&mut self, item: &str, record: StudyRecord) {
        self.insert(item.to_string(), record);
    }

    fn delete(&mut self, item: &str) -> Option<StudyRecord> {
        self.remove(item)
    }
}

impl RecordStore for BTreeMap<String, StudyRecord> {
    fn record(&self, item: &str) -> Option<&StudyRecord> {
        self.get(item)
    }
}

impl RecordStoreMut for BTreeMap<String, StudyRecord> {
    fn put(&mut self, item: &str, record: StudyRecord) {
        self.insert(item.to_string(), record);
    }

    fn delete(&mut self, item: &str) -> Option<StudyRecord> {
        self.remove(item)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn record(&self, item: &str) -> Option<&StudyRecord> {
        (**self).record(item)
    }
}

/// Anything in a catalog the scheduler can identify by key.
///
/// Content fields stay with the caller; the scheduler only reads the id.
pub trait CatalogItem {
    fn item_id(&self) -> &str;
}

impl CatalogItem for String {
    fn item_id(&self) -> &str {
        self
    }
}

impl CatalogItem for str {
    fn item_id(&self) -> &str {
        self
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for &T {
    fn item_id(&self) -> &str {
        (**self).item_id()
    }
}

/// Remove the records for `items`, e.g. to clear progress for one topic.
///
/// Returns how many records were actually removed; unknown keys are skipped.
pub fn reset<S, I>(store: &mut S, items: I) -> usize
where
    S: RecordStoreMut + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let removed = items
        .into_iter()
        .filter(|item| store.delete(item.as_ref()).is_some())
        .count();
    tracing::debug!(removed, "Reset study records");
    removed
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn record() -> StudyRecord {
        StudyRecord::seed(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_hash_map_store() {
        let mut store: HashMap<String, StudyRecord> = HashMap::new();
        assert!(!store.contains("hello"));
        store.put("hello", record());
        assert!(store.contains("hello"));
        assert_eq!(store.record("hello"), Some(&record()));
        assert_eq!(store.delete("hello"), Some(record()));
        assert!(!store.contains("hello"));
    }

    #[test]
    fn test_reset_removes_only_listed_keys() {
        let mut store = StudyProgress::new();
        store.put("apple", record());
        store.put("banana", record());
        store.put("cherry", record());

        let removed = reset(&mut store, ["apple", "cherry", "durian"]);

        assert_eq!(removed, 2);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["banana"]);
    }

    #[test]
    fn test_reset_on_empty_store() {
        let mut store = StudyProgress::new();
        assert_eq!(reset(&mut store, Vec::<String>::new()), 0);
        assert_eq!(reset(&mut store, ["apple"]), 0);
    }

    #[test]
    fn test_catalog_item_ids() {
        let owned = String::from("cat");
        assert_eq!(owned.item_id(), "cat");
        assert_eq!((&owned).item_id(), "cat");
        assert_eq!("dog".item_id(), "dog");
    }
}
