use serde::{Deserialize, Serialize};

/// Items whose progress should be cleared, e.g. every word of one topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Records that existed and were removed
    pub removed: usize,
}
