use bevy_ecs::message::Message;

use crate::model::{EnrichmentToken, SessionSummary};

/// Reactive events emitted by the command applicator for the hosting UI.
///
/// The UI reads these to show the feedback card, kick off best-effort
/// enrichment (tagged with the carried token), and persist the summary on
/// completion.
#[derive(Message, Clone, Debug)]
pub enum SessionEvent {
    LevelStarted {
        level: u32,
        item_count: usize,
        timer_seconds: u32,
    },
    /// A resolution happened; feedback is pending until dismissed.
    FeedbackReady {
        token: EnrichmentToken,
        correct: bool,
    },
    /// Feedback was dismissed and the next item is active.
    ItemAdvanced { index: usize },
    /// The last item was dismissed. No auto-reset; the host decides what
    /// happens next.
    LevelCompleted { summary: SessionSummary },
}
