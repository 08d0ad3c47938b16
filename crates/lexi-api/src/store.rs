//! In-memory progress store, one record map per learner.
//!
//! Every read-modify-write for a learner runs under the write lock, so two
//! reviews of the same learner never race.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use lexi_srs::{Grade, ReviewOutcome, Scheduler, SrsError, StudyProgress};
use tokio::sync::RwLock;

/// Owned copy of a study session, detached from the request's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSets {
    pub due: Vec<String>,
    pub new: Vec<String>,
    pub relearning: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ProgressStore {
    learners: Arc<RwLock<HashMap<String, StudyProgress>>>,
}

/// Learner names compare case-insensitively.
pub fn learner_key(learner: &str) -> String {
    learner.trim().to_lowercase()
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a learner's records. Unknown learners have no records.
    pub async fn progress(&self, learner: &str) -> StudyProgress {
        self.learners
            .read()
            .await
            .get(&learner_key(learner))
            .cloned()
            .unwrap_or_default()
    }

    /// Replace a learner's records wholesale.
    pub async fn replace(&self, learner: &str, progress: StudyProgress) {
        self.learners
            .write()
            .await
            .insert(learner_key(learner), progress);
    }

    pub async fn review(
        &self,
        scheduler: &Scheduler,
        learner: &str,
        item: &str,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome, SrsError> {
        let mut learners = self.learners.write().await;
        let progress = learners.entry(learner_key(learner)).or_default();
        scheduler.review(progress, item, grade, now)
    }

    pub async fn session(
        &self,
        learner: &str,
        catalog: &[String],
        now: DateTime<Utc>,
    ) -> SessionSets {
        let learners = self.learners.read().await;
        let empty = StudyProgress::new();
        let progress = learners.get(&learner_key(learner)).unwrap_or(&empty);
        let session = lexi_srs::session(catalog, progress, now);

        SessionSets {
            due: session.due.into_iter().cloned().collect(),
            new: session.new.into_iter().cloned().collect(),
            relearning: session.relearning.into_iter().cloned().collect(),
        }
    }

    /// Remove the listed records; returns how many existed.
    pub async fn reset(&self, learner: &str, items: &[String]) -> usize {
        let mut learners = self.learners.write().await;
        learners
            .get_mut(&learner_key(learner))
            .map_or(0, |progress| lexi_srs::reset(progress, items))
    }
}
