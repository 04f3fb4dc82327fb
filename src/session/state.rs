use bevy_ecs::resource::Resource;

use crate::feedback::template::local_message;
use crate::model::{
    EnrichmentToken, FeedbackResult, Language, Resolution, SessionSummary, WasteItem,
};

/// Points awarded for a correct drop. Score is never decremented.
pub const CORRECT_DROP_REWARD: u32 = 10;

/// Items sampled per level when the pool is large enough.
pub const ITEMS_PER_LEVEL: usize = 5;

/// Lifecycle of one level play-through.
///
/// `Idle → ItemActive → AwaitingFeedback → ItemActive … → LevelComplete`,
/// with `Idle` re-entered only by an explicit reset against an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    ItemActive,
    AwaitingFeedback,
    LevelComplete,
}

/// What a successful `dismiss` led to.
#[derive(Debug, Clone, PartialEq)]
pub enum DismissOutcome {
    /// The next item is active; the caller re-arms the countdown.
    Advanced { index: usize },
    /// That was the last item.
    Completed { summary: SessionSummary },
}

/// The central mutable state for one level play-through.
///
/// All mutation goes through [`begin`](Self::begin), [`resolve`](Self::resolve),
/// [`dismiss`](Self::dismiss), and [`apply_enrichment`](Self::apply_enrichment);
/// each is a no-op outside its valid phase, which is what makes duplicate UI
/// events (double drops, late timer ticks) harmless.
#[derive(Resource, Debug)]
pub struct LevelSession {
    level: u32,
    language: Language,
    phase: SessionPhase,
    items: Vec<WasteItem>,
    current_index: usize,
    score: u32,
    attempts: u32,
    correct_sorts: u32,
    reward: u32,
    ticks_spent: u64,
    pending_feedback: Option<FeedbackResult>,
    epoch: u64,
}

impl LevelSession {
    /// A session that has not started a level yet.
    pub fn idle(language: Language) -> Self {
        Self {
            level: 0,
            language,
            phase: SessionPhase::Idle,
            items: Vec::new(),
            current_index: 0,
            score: 0,
            attempts: 0,
            correct_sorts: 0,
            reward: CORRECT_DROP_REWARD,
            ticks_spent: 0,
            pending_feedback: None,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn correct_sorts(&self) -> u32 {
        self.correct_sorts
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items(&self) -> &[WasteItem] {
        &self.items
    }

    pub fn ticks_spent(&self) -> u64 {
        self.ticks_spent
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The item currently being sorted, if one is active.
    pub fn active_item(&self) -> Option<&WasteItem> {
        match self.phase {
            SessionPhase::ItemActive => self.items.get(self.current_index),
            _ => None,
        }
    }

    pub fn pending_feedback(&self) -> Option<&FeedbackResult> {
        self.pending_feedback.as_ref()
    }

    /// Token identifying the pending feedback card, for tagging enrichment
    /// requests. `None` unless feedback is pending.
    pub fn pending_token(&self) -> Option<EnrichmentToken> {
        match self.phase {
            SessionPhase::AwaitingFeedback => Some(EnrichmentToken {
                epoch: self.epoch,
                item_index: self.current_index,
            }),
            _ => None,
        }
    }

    /// Start (or restart) a level with an already-sampled item sequence.
    ///
    /// Discards all in-flight state and bumps the session epoch, which
    /// invalidates any enrichment response still on the wire. Returns false
    /// and leaves the session untouched when `items` is empty; the level
    /// simply does not start.
    pub fn begin(&mut self, level: u32, items: Vec<WasteItem>, reward: u32) -> bool {
        if items.is_empty() {
            return false;
        }
        self.level = level;
        self.items = items;
        self.current_index = 0;
        self.score = 0;
        self.attempts = 0;
        self.correct_sorts = 0;
        self.reward = reward;
        self.ticks_spent = 0;
        self.pending_feedback = None;
        self.epoch += 1;
        self.phase = SessionPhase::ItemActive;
        true
    }

    /// Resolve the active item via a drop or a timeout.
    ///
    /// Valid only in `ItemActive`; any other phase returns `None` without
    /// touching score, attempts, or pending feedback. On success the session
    /// holds a freshly composed local feedback message and the returned token
    /// tags a best-effort enrichment request for this exact card.
    pub fn resolve(&mut self, resolution: Resolution) -> Option<EnrichmentToken> {
        if self.phase != SessionPhase::ItemActive {
            return None;
        }
        let item = self.items[self.current_index].clone();
        let correct = match resolution {
            Resolution::Drop { bin } => bin == item.correct_bin,
            Resolution::Timeout => false,
        };
        self.attempts += 1;
        if correct {
            self.score += self.reward;
            self.correct_sorts += 1;
        }
        let message = local_message(&item, resolution, self.language);
        self.pending_feedback = Some(FeedbackResult {
            correct,
            chosen_bin: resolution.displayed_bin(),
            item,
            message,
        });
        self.phase = SessionPhase::AwaitingFeedback;
        Some(EnrichmentToken {
            epoch: self.epoch,
            item_index: self.current_index,
        })
    }

    /// Dismiss the pending feedback card and move on.
    ///
    /// Valid only in `AwaitingFeedback`. Advances to the next item, or
    /// completes the level after the last one. No auto-reset: a new level
    /// starts only on an explicit command.
    pub fn dismiss(&mut self) -> Option<DismissOutcome> {
        if self.phase != SessionPhase::AwaitingFeedback {
            return None;
        }
        self.pending_feedback = None;
        if self.current_index + 1 < self.items.len() {
            self.current_index += 1;
            self.phase = SessionPhase::ItemActive;
            Some(DismissOutcome::Advanced {
                index: self.current_index,
            })
        } else {
            self.phase = SessionPhase::LevelComplete;
            Some(DismissOutcome::Completed {
                summary: self.summary(),
            })
        }
    }

    /// Swap the pending feedback message for an enriched one.
    ///
    /// Applies only while the card the token was issued for is still pending;
    /// stale responses (previous item, previous session, or arriving after
    /// dismissal) are discarded. Empty messages never replace the local one.
    pub fn apply_enrichment(&mut self, token: EnrichmentToken, message: String) -> bool {
        if self.phase != SessionPhase::AwaitingFeedback
            || token.epoch != self.epoch
            || token.item_index != self.current_index
            || message.trim().is_empty()
        {
            return false;
        }
        if let Some(feedback) = self.pending_feedback.as_mut() {
            feedback.message = message;
            true
        } else {
            false
        }
    }

    /// One second of play time. Counts only while a level is in progress.
    pub fn tick_time(&mut self) {
        if matches!(
            self.phase,
            SessionPhase::ItemActive | SessionPhase::AwaitingFeedback
        ) {
            self.ticks_spent += 1;
        }
    }

    /// Accounting snapshot for persistence and the completion event.
    pub fn summary(&self) -> SessionSummary {
        let accuracy = if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.correct_sorts) / f64::from(self.attempts)
        };
        SessionSummary {
            level: self.level,
            score: self.score,
            items_sorted: self.attempts,
            correct_sorts: self.correct_sorts,
            accuracy,
            time_spent_seconds: self.ticks_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BinId, LocalizedText};

    fn item(id: u64, correct_bin: BinId) -> WasteItem {
        WasteItem::new(
            id,
            LocalizedText::new(format!("item {id}"), format!("Ding {id}")),
            LocalizedText::new("a thing", "ein Ding"),
            correct_bin,
        )
    }

    fn started(items: Vec<WasteItem>) -> LevelSession {
        let mut session = LevelSession::idle(Language::En);
        assert!(session.begin(1, items, CORRECT_DROP_REWARD));
        session
    }

    #[test]
    fn begin_rejects_empty_item_list() {
        let mut session = LevelSession::idle(Language::En);
        assert!(!session.begin(1, Vec::new(), CORRECT_DROP_REWARD));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.epoch(), 0);
    }

    #[test]
    fn correct_drop_scores_and_blocks_on_feedback() {
        let mut session = started(vec![item(1, BinId::Paper), item(2, BinId::Bio)]);
        let token = session.resolve(Resolution::Drop { bin: BinId::Paper });
        assert!(token.is_some());
        assert_eq!(session.phase(), SessionPhase::AwaitingFeedback);
        assert_eq!(session.score(), 10);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.correct_sorts(), 1);
        let feedback = session.pending_feedback().unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.chosen_bin, BinId::Paper);
        assert!(!feedback.message.is_empty());
    }

    #[test]
    fn incorrect_drop_counts_attempt_without_score() {
        let mut session = started(vec![item(1, BinId::Paper)]);
        session.resolve(Resolution::Drop { bin: BinId::Glass });
        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.correct_sorts(), 0);
        assert!(!session.pending_feedback().unwrap().correct);
    }

    #[test]
    fn timeout_is_an_incorrect_resolution_with_fallback_bin() {
        let mut session = started(vec![item(1, BinId::Glass)]);
        session.resolve(Resolution::Timeout);
        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 1);
        let feedback = session.pending_feedback().unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.chosen_bin, BinId::Residual);
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let mut session = started(vec![item(1, BinId::Paper), item(2, BinId::Bio)]);
        session.resolve(Resolution::Drop { bin: BinId::Paper });
        let before = session.pending_feedback().cloned();
        assert!(session.resolve(Resolution::Drop { bin: BinId::Bio }).is_none());
        assert!(session.resolve(Resolution::Timeout).is_none());
        assert_eq!(session.score(), 10);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.pending_feedback().cloned(), before);
    }

    #[test]
    fn dismiss_advances_then_completes() {
        let mut session = started(vec![item(1, BinId::Paper), item(2, BinId::Bio)]);
        session.resolve(Resolution::Drop { bin: BinId::Paper });
        assert_eq!(
            session.dismiss(),
            Some(DismissOutcome::Advanced { index: 1 })
        );
        assert_eq!(session.phase(), SessionPhase::ItemActive);
        assert_eq!(session.active_item().unwrap().id, 2);

        session.resolve(Resolution::Timeout);
        match session.dismiss() {
            Some(DismissOutcome::Completed { summary }) => {
                assert_eq!(summary.score, 10);
                assert_eq!(summary.items_sorted, 2);
                assert_eq!(summary.correct_sorts, 1);
                assert!((summary.accuracy - 0.5).abs() < f64::EPSILON);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(session.phase(), SessionPhase::LevelComplete);
        // No further resolutions accepted until a new level starts.
        assert!(session.resolve(Resolution::Timeout).is_none());
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn dismiss_outside_feedback_phase_is_ignored() {
        let mut session = started(vec![item(1, BinId::Paper)]);
        assert!(session.dismiss().is_none());
        assert_eq!(session.phase(), SessionPhase::ItemActive);
    }

    #[test]
    fn current_index_never_decreases_within_a_session() {
        let mut session = started(vec![
            item(1, BinId::Paper),
            item(2, BinId::Bio),
            item(3, BinId::Glass),
        ]);
        let mut last = session.current_index();
        for _ in 0..2 {
            session.resolve(Resolution::Timeout);
            session.dismiss();
            assert!(session.current_index() >= last);
            last = session.current_index();
        }
    }

    #[test]
    fn begin_resets_state_and_bumps_epoch() {
        let mut session = started(vec![item(1, BinId::Paper)]);
        session.resolve(Resolution::Drop { bin: BinId::Paper });
        let old_epoch = session.epoch();

        assert!(session.begin(2, vec![item(9, BinId::Bulky)], CORRECT_DROP_REWARD));
        assert_eq!(session.level(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.pending_feedback().is_none());
        assert_eq!(session.epoch(), old_epoch + 1);
    }

    #[test]
    fn enrichment_applies_only_to_the_pending_card() {
        let mut session = started(vec![item(1, BinId::Paper), item(2, BinId::Bio)]);
        let token = session
            .resolve(Resolution::Drop { bin: BinId::Paper })
            .unwrap();
        assert!(session.apply_enrichment(token, "richer text".to_string()));
        assert_eq!(session.pending_feedback().unwrap().message, "richer text");

        // After dismissal the same token is stale.
        session.dismiss();
        session.resolve(Resolution::Timeout);
        assert!(!session.apply_enrichment(token, "too late".to_string()));
        assert_ne!(session.pending_feedback().unwrap().message, "too late");
    }

    #[test]
    fn enrichment_from_a_previous_session_is_discarded() {
        let mut session = started(vec![item(1, BinId::Paper)]);
        let token = session
            .resolve(Resolution::Drop { bin: BinId::Paper })
            .unwrap();
        session.begin(1, vec![item(2, BinId::Bio)], CORRECT_DROP_REWARD);
        session.resolve(Resolution::Drop { bin: BinId::Bio });
        assert!(!session.apply_enrichment(token, "stale".to_string()));
    }

    #[test]
    fn empty_enrichment_never_replaces_the_local_message() {
        let mut session = started(vec![item(1, BinId::Paper)]);
        let token = session
            .resolve(Resolution::Drop { bin: BinId::Paper })
            .unwrap();
        assert!(!session.apply_enrichment(token, "   ".to_string()));
        assert!(!session.pending_feedback().unwrap().message.is_empty());
    }

    #[test]
    fn time_is_counted_only_while_playing() {
        let mut session = LevelSession::idle(Language::En);
        session.tick_time();
        assert_eq!(session.ticks_spent(), 0);

        session.begin(1, vec![item(1, BinId::Paper)], CORRECT_DROP_REWARD);
        session.tick_time();
        session.resolve(Resolution::Timeout);
        session.tick_time();
        assert_eq!(session.ticks_spent(), 2);

        session.dismiss();
        assert_eq!(session.phase(), SessionPhase::LevelComplete);
        session.tick_time();
        assert_eq!(session.ticks_spent(), 2);
    }

    #[test]
    fn score_matches_reward_times_correct_sorts() {
        let mut session = started(vec![
            item(1, BinId::Paper),
            item(2, BinId::Bio),
            item(3, BinId::Glass),
        ]);
        session.resolve(Resolution::Drop { bin: BinId::Paper });
        session.dismiss();
        session.resolve(Resolution::Drop { bin: BinId::Bio });
        session.dismiss();
        session.resolve(Resolution::Drop { bin: BinId::Paper });
        session.dismiss();
        assert_eq!(session.score(), CORRECT_DROP_REWARD * session.correct_sorts());
        assert_eq!(session.attempts(), 3);
        assert_eq!(session.correct_sorts(), 2);
    }
}
