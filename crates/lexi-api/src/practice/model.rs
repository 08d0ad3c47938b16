use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::SessionSets;

/// A learner's grade for one item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewSubmission {
    /// Catalog id of the graded item
    #[validate(length(min = 1, max = 255))]
    pub item: String,
    /// One of `again`, `good`, `easy`
    #[validate(length(min = 1, max = 16))]
    pub grade: String,
}

/// The catalog a session is composed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub items: Vec<String>,
}

/// Due, new and relearning items, in catalog order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub due: Vec<String>,
    pub new: Vec<String>,
    pub relearning: Vec<String>,
    /// Catalog items not scheduled right now
    pub not_due_count: usize,
}

impl SessionResponse {
    pub fn new(sets: SessionSets, catalog_len: usize) -> Self {
        let scheduled = sets.due.len() + sets.new.len() + sets.relearning.len();
        Self {
            not_due_count: catalog_len.saturating_sub(scheduled),
            due: sets.due,
            new: sets.new,
            relearning: sets.relearning,
        }
    }
}
