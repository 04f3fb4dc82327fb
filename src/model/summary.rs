use serde::{Deserialize, Serialize};

/// Final accounting for one completed level, emitted with
/// `SessionEvent::LevelCompleted` and persisted fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub level: u32,
    pub score: u32,
    pub items_sorted: u32,
    pub correct_sorts: u32,
    pub accuracy: f64,
    pub time_spent_seconds: u64,
}

/// Cumulative player progress, upserted after each completed level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub level: u32,
    pub total_correct: u64,
    pub total_attempts: u64,
    pub completed_levels: u32,
}
