//! SRS (Spaced Repetition System) library for Lexi
//!
//! This crate decides, for every vocabulary item a learner has seen, when it
//! must next be shown, and partitions a learner's vocabulary into new, due and
//! not-yet-due items at any moment.
//!
//! Everything here is pure and synchronous. The current time is always an
//! explicit argument and the record store is borrowed from the caller, who
//! owns its persistence.
//!
//! ```
//! use chrono::{Duration, Utc};
//! use lexi_srs::{Grade, StudyProgress};
//!
//! let now = Utc::now();
//! let catalog = vec!["hello".to_string(), "goodbye".to_string()];
//! let mut progress = StudyProgress::new();
//!
//! lexi_srs::review(&mut progress, "hello", Grade::Good, now).unwrap();
//!
//! let session = lexi_srs::session(&catalog, &progress, now);
//! assert_eq!(session.new, vec!["goodbye"]);
//! assert!(session.due.is_empty());
//!
//! let tomorrow = now + Duration::hours(25);
//! assert_eq!(lexi_srs::partition_due(&catalog, &progress, tomorrow), vec!["hello"]);
//! ```

mod error;
mod goal;
mod grade;
mod interval;
mod partition;
mod record;
mod scheduler;
mod store;

use std::sync::LazyLock;

use chrono::{DateTime, Utc};

pub use error::SrsError;
pub use goal::{GoalType, UnknownGoalType};
pub use grade::Grade;
pub use interval::{DEFAULT_AGAIN_DELAY_MINUTES, DEFAULT_INTERVALS_DAYS, SchedulerConfig};
pub use partition::{
    Bucket, Session, classify, partition_due, partition_new, partition_relearning, session,
};
pub use record::StudyRecord;
pub use scheduler::{ReviewOutcome, Scheduler};
pub use store::{CatalogItem, RecordStore, RecordStoreMut, StudyProgress, reset};

static DEFAULT_SCHEDULER: LazyLock<Scheduler> = LazyLock::new(Scheduler::default);

/// The canonical "never reviewed" record: level 0, due at `now`, no grade.
pub const fn seed(now: DateTime<Utc>) -> StudyRecord {
    StudyRecord::seed(now)
}

/// Apply a grade using the default interval table.
///
/// See [`Scheduler::advance`].
pub fn advance(
    record: &StudyRecord,
    grade: Grade,
    now: DateTime<Utc>,
) -> Result<StudyRecord, SrsError> {
    DEFAULT_SCHEDULER.advance(record, grade, now)
}

/// Grade an item and store the result, using the default interval table.
///
/// See [`Scheduler::review`].
pub fn review<S>(
    store: &mut S,
    item: &str,
    grade: Grade,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome, SrsError>
where
    S: RecordStoreMut + ?Sized,
{
    DEFAULT_SCHEDULER.review(store, item, grade, now)
}
