use serde::{Deserialize, Serialize};

use super::bin::BinId;
use super::item::WasteItem;

/// How the active item was resolved: a player drop onto a bin, or the
/// countdown running out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Drop { bin: BinId },
    Timeout,
}

impl Resolution {
    /// The bin shown in the feedback card. Timeouts have no chosen bin, so
    /// the first catalog entry stands in for display purposes only.
    pub fn displayed_bin(&self) -> BinId {
        match self {
            Resolution::Drop { bin } => *bin,
            Resolution::Timeout => crate::model::Bin::fallback().id,
        }
    }
}

/// The outcome of one resolution, shown to the player until dismissed.
///
/// Created exactly once per resolution and consumed exactly once by
/// `DismissFeedback`; never mutated afterward except for the best-effort
/// message enrichment, which swaps `message` in place while the card is
/// still pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub correct: bool,
    pub item: WasteItem,
    pub chosen_bin: BinId,
    pub message: String,
}

/// Identifies the resolution an enrichment request was issued for.
///
/// `epoch` increments on every level start/reset, `item_index` is the index
/// of the resolved item, so a response arriving after the session moved on
/// never matches and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentToken {
    pub epoch: u64,
    pub item_index: usize,
}
