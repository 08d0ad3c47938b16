use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Grade;

/// Review state of one item for one learner.
///
/// A record exists for an item iff the learner has graded it at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    /// 0 means never successfully reviewed (fresh or just reset). Positive
    /// values index into the interval table.
    pub level: u32,
    /// Earliest moment the item should be presented again.
    pub next_review_at: DateTime<Utc>,
    /// Grade of the last transition, `None` for a seed record.
    pub last_grade: Option<Grade>,
}

impl StudyRecord {
    /// The canonical "never reviewed" record: level 0, due at `now`, no grade.
    pub const fn seed(now: DateTime<Utc>) -> Self {
        Self {
            level: 0,
            next_review_at: now,
            last_grade: None,
        }
    }

    /// Whether this item has left level 0.
    pub const fn is_learned(&self) -> bool {
        self.level > 0
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.is_learned() && self.next_review_at <= now
    }

    /// A level-0 record whose short `again` delay has elapsed.
    pub fn is_relearning(&self, now: DateTime<Utc>) -> bool {
        !self.is_learned() && self.next_review_at <= now
    }
}
