use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    GoalType, Grade, SchedulerConfig, SrsError, StudyRecord,
    store::{RecordStore, RecordStoreMut},
};

/// Applies grading transitions using a fixed interval table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    config: SchedulerConfig,
}

/// Result of grading one item through [`Scheduler::review`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub item: String,
    pub record: StudyRecord,
    /// Whether the item had no record before this review.
    pub was_new: bool,
    /// Goal events for the daily-goal and challenge bookkeeping.
    pub goals: Vec<GoalType>,
}

impl Scheduler {
    pub const fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn max_level(&self) -> u32 {
        self.config.max_level()
    }

    /// The record used for an item about to be graded for the first time.
    pub const fn seed(&self, now: DateTime<Utc>) -> StudyRecord {
        StudyRecord::seed(now)
    }

    /// Compute the record that follows `record` after a `grade` at `now`.
    ///
    /// * `again` resets to level 0 and resurfaces after the short delay.
    /// * `good` climbs one level, `easy` climbs two, both clamped at the top
    ///   of the interval table. The next review is `now` plus the interval of
    ///   the new level.
    ///
    /// # Errors
    ///
    /// Returns [`SrsError::InvalidLevel`] when `record.level` lies beyond the
    /// interval table, rather than coercing a corrupted record, and
    /// [`SrsError::ScheduleOverflow`] when the next review date cannot be
    /// represented.
    pub fn advance(
        &self,
        record: &StudyRecord,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> Result<StudyRecord, SrsError> {
        let max = self.max_level();
        if record.level > max {
            return Err(SrsError::InvalidLevel {
                level: record.level,
                max,
            });
        }

        let (level, wait) = match grade {
            Grade::Again => (0, self.config.again_delay()),
            Grade::Good | Grade::Easy => {
                let level = record.level.saturating_add(grade.step()).min(max);
                let interval = self
                    .config
                    .interval_for_level(level)
                    .ok_or(SrsError::InvalidLevel { level, max })?;
                (level, interval)
            }
        };
        let next_review_at = now
            .checked_add_signed(wait)
            .ok_or(SrsError::ScheduleOverflow)?;

        tracing::trace!(
            from = record.level,
            to = level,
            %grade,
            %next_review_at,
            "Advanced study record"
        );

        Ok(StudyRecord {
            level,
            next_review_at,
            last_grade: Some(grade),
        })
    }

    /// Grade `item` and write the new record back into `store`.
    ///
    /// Items without a record start from [`Scheduler::seed`]. The store is
    /// left untouched when the transition fails.
    pub fn review<S>(
        &self,
        store: &mut S,
        item: &str,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome, SrsError>
    where
        S: RecordStoreMut + ?Sized,
    {
        let current = store.record(item).copied();
        let was_new = current.is_none();
        let record = self.advance(&current.unwrap_or_else(|| self.seed(now)), grade, now)?;
        store.put(item, record);

        let mut goals = Vec::with_capacity(2);
        if was_new && grade != Grade::Again {
            goals.push(GoalType::LearnNew);
        }
        goals.push(GoalType::ReviewSrs);

        tracing::debug!(item, %grade, was_new, level = record.level, "Recorded review");

        Ok(ReviewOutcome {
            item: item.to_string(),
            record,
            was_new,
            goals,
        })
    }
}
