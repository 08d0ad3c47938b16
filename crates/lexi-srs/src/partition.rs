//! Partitioning a catalog into new, due and not-yet-due items.
//!
//! All queries are pure functions of `(catalog, store, now)`: they never
//! mutate the store and return empty sets for an empty catalog or store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    StudyRecord,
    store::{CatalogItem, RecordStore},
};

/// Where a single item stands at a given moment.
///
/// Every item falls in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// No record: never graded.
    New,
    /// Level above 0 and the review time has passed.
    Due,
    /// Level above 0, review time still in the future.
    NotDue,
    /// Level 0 with a record, and the `again` delay has elapsed.
    Relearning,
    /// Level 0 with a record, still inside the `again` delay.
    Cooldown,
}

impl Bucket {
    pub fn of(record: Option<&StudyRecord>, now: DateTime<Utc>) -> Self {
        match record {
            None => Self::New,
            Some(record) if record.is_learned() => {
                if record.next_review_at <= now {
                    Self::Due
                } else {
                    Self::NotDue
                }
            }
            Some(record) if record.is_relearning(now) => Self::Relearning,
            Some(_) => Self::Cooldown,
        }
    }
}

/// Classify a single catalog item against the store.
pub fn classify<S>(item: &str, store: &S, now: DateTime<Utc>) -> Bucket
where
    S: RecordStore + ?Sized,
{
    Bucket::of(store.record(item), now)
}

/// Items with a record at level above 0 whose review time has passed.
///
/// Level-0 records are never due, even when their `again` delay is over;
/// see [`partition_relearning`].
pub fn partition_due<'a, T, S>(catalog: &'a [T], store: &S, now: DateTime<Utc>) -> Vec<&'a T>
where
    T: CatalogItem,
    S: RecordStore + ?Sized,
{
    catalog
        .iter()
        .filter(|item| {
            store
                .record(item.item_id())
                .is_some_and(|record| record.is_due(now))
        })
        .collect()
}

/// Items with no record in the store.
pub fn partition_new<'a, T, S>(catalog: &'a [T], store: &S) -> Vec<&'a T>
where
    T: CatalogItem,
    S: RecordStore + ?Sized,
{
    catalog
        .iter()
        .filter(|item| !store.contains(item.item_id()))
        .collect()
}

/// Items reset to level 0 by an `again` grade whose short delay has elapsed.
pub fn partition_relearning<'a, T, S>(
    catalog: &'a [T],
    store: &S,
    now: DateTime<Utc>,
) -> Vec<&'a T>
where
    T: CatalogItem,
    S: RecordStore + ?Sized,
{
    catalog
        .iter()
        .filter(|item| {
            store
                .record(item.item_id())
                .is_some_and(|record| record.is_relearning(now))
        })
        .collect()
}

/// The item sets a study session is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session<'a, T> {
    pub due: Vec<&'a T>,
    pub new: Vec<&'a T>,
    pub relearning: Vec<&'a T>,
}

impl<T> Session<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.due.is_empty() && self.new.is_empty() && self.relearning.is_empty()
    }

    /// Number of items the session would present.
    pub fn len(&self) -> usize {
        self.due.len() + self.new.len() + self.relearning.len()
    }
}

/// Due, new and relearning items in a single pass over the catalog.
///
/// Catalog order is preserved inside each set. Not-due items and items still
/// inside their `again` delay are left out.
pub fn session<'a, T, S>(catalog: &'a [T], store: &S, now: DateTime<Utc>) -> Session<'a, T>
where
    T: CatalogItem,
    S: RecordStore + ?Sized,
{
    let mut session = Session {
        due: Vec::new(),
        new: Vec::new(),
        relearning: Vec::new(),
    };

    for item in catalog {
        match classify(item.item_id(), store, now) {
            Bucket::New => session.new.push(item),
            Bucket::Due => session.due.push(item),
            Bucket::Relearning => session.relearning.push(item),
            Bucket::NotDue | Bucket::Cooldown => {}
        }
    }

    tracing::trace!(
        catalog = catalog.len(),
        due = session.due.len(),
        new = session.new.len(),
        relearning = session.relearning.len(),
        "Composed study session"
    );

    session
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::{Grade, StudyProgress};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn record(level: u32, next_review_at: DateTime<Utc>) -> StudyRecord {
        StudyRecord {
            level,
            next_review_at,
            last_grade: Some(if level == 0 { Grade::Again } else { Grade::Good }),
        }
    }

    fn catalog() -> Vec<String> {
        ["new", "due", "later", "relearn", "cooling"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn store() -> StudyProgress {
        let mut store = StudyProgress::new();
        store.insert("due".into(), record(2, t0() - Duration::hours(1)));
        store.insert("later".into(), record(4, t0() + Duration::days(5)));
        store.insert("relearn".into(), record(0, t0() - Duration::minutes(1)));
        store.insert("cooling".into(), record(0, t0() + Duration::minutes(5)));
        store
    }

    #[test]
    fn test_partition_new() {
        let catalog = catalog();
        assert_eq!(partition_new(&catalog, &store()), vec!["new"]);
    }

    #[test]
    fn test_partition_due() {
        let catalog = catalog();
        assert_eq!(partition_due(&catalog, &store(), t0()), vec!["due"]);

        // Far enough in the future, the not-due item turns due as well
        let later = t0() + Duration::days(6);
        assert_eq!(partition_due(&catalog, &store(), later), vec!["due", "later"]);
    }

    #[test]
    fn test_level_zero_records_are_neither_new_nor_due() {
        let catalog = catalog();
        let store = store();
        let far_future = t0() + Duration::days(1000);
        let new = partition_new(&catalog, &store);
        let due = partition_due(&catalog, &store, far_future);
        for item in ["relearn", "cooling"] {
            assert!(!new.iter().any(|i| *i == item));
            assert!(!due.iter().any(|i| *i == item));
        }
    }

    #[test]
    fn test_partition_relearning() {
        let catalog = catalog();
        assert_eq!(partition_relearning(&catalog, &store(), t0()), vec!["relearn"]);
        assert_eq!(
            partition_relearning(&catalog, &store(), t0() + Duration::minutes(5)),
            vec!["relearn", "cooling"]
        );
    }

    #[test]
    fn test_session() {
        let catalog = catalog();
        let session = session(&catalog, &store(), t0());
        assert_eq!(session.due, vec!["due"]);
        assert_eq!(session.new, vec!["new"]);
        assert_eq!(session.relearning, vec!["relearn"]);
        assert_eq!(session.len(), 3);
        assert!(!session.is_empty());
    }

    #[test]
    fn test_session_matches_individual_queries() {
        let catalog = catalog();
        let store = store();
        for offset in [0, 10, 60 * 24 * 6] {
            let now = t0() + Duration::minutes(offset);
            let session = session(&catalog, &store, now);
            assert_eq!(session.due, partition_due(&catalog, &store, now));
            assert_eq!(session.new, partition_new(&catalog, &store));
            assert_eq!(
                session.relearning,
                partition_relearning(&catalog, &store, now)
            );
        }
    }

    #[test]
    fn test_session_is_idempotent() {
        let catalog = catalog();
        let store = store();
        let before = store.clone();
        let first = session(&catalog, &store, t0());
        let second = session(&catalog, &store, t0());
        assert_eq!(first, second);
        assert_eq!(store, before);
    }

    #[test]
    fn test_every_item_lands_in_exactly_one_bucket() {
        let catalog = catalog();
        let store = store();
        let buckets: HashMap<&str, Bucket> = catalog
            .iter()
            .map(|item| (item.as_str(), classify(item, &store, t0())))
            .collect();
        assert_eq!(buckets["new"], Bucket::New);
        assert_eq!(buckets["due"], Bucket::Due);
        assert_eq!(buckets["later"], Bucket::NotDue);
        assert_eq!(buckets["relearn"], Bucket::Relearning);
        assert_eq!(buckets["cooling"], Bucket::Cooldown);

        let session = session(&catalog, &store, t0());
        for item in &catalog {
            let hits = [&session.due, &session.new, &session.relearning]
                .iter()
                .filter(|set| set.contains(&item))
                .count();
            assert!(hits <= 1, "{item} appears in {hits} session sets");
        }
    }

    #[test]
    fn test_empty_inputs() {
        let empty_catalog: Vec<String> = Vec::new();
        let empty_store = StudyProgress::new();

        assert!(partition_due(&empty_catalog, &store(), t0()).is_empty());
        assert!(partition_new(&empty_catalog, &store()).is_empty());
        assert!(session(&empty_catalog, &empty_store, t0()).is_empty());

        // A brand-new learner sees the whole catalog as new
        let catalog = catalog();
        let session = session(&catalog, &empty_store, t0());
        assert_eq!(session.new.len(), catalog.len());
        assert!(session.due.is_empty());
        assert!(session.relearning.is_empty());
    }

    #[test]
    fn test_works_with_custom_catalog_items() {
        #[derive(Debug, PartialEq)]
        struct Word {
            english: &'static str,
            translation: &'static str,
        }

        impl CatalogItem for Word {
            fn item_id(&self) -> &str {
                self.english
            }
        }

        let words = [
            Word {
                english: "due",
                translation: "đến hạn",
            },
            Word {
                english: "fresh",
                translation: "mới",
            },
        ];
        let session = session(&words, &store(), t0());
        assert_eq!(session.due, vec![&words[0]]);
        assert_eq!(session.new, vec![&words[1]]);
        assert_eq!(session.new[0].translation, "mới");
    }
}
