use bevy_ecs::system::Res;

use super::state::{LevelSession, SessionPhase};

// Internal check functions for testability.

fn item_active_check(phase: SessionPhase) -> bool {
    phase == SessionPhase::ItemActive
}

fn awaiting_feedback_check(phase: SessionPhase) -> bool {
    phase == SessionPhase::AwaitingFeedback
}

fn level_complete_check(phase: SessionPhase) -> bool {
    phase == SessionPhase::LevelComplete
}

// Bevy run condition functions (for use with `.run_if()`).

pub fn item_active(session: Res<LevelSession>) -> bool {
    item_active_check(session.phase())
}

pub fn awaiting_feedback(session: Res<LevelSession>) -> bool {
    awaiting_feedback_check(session.phase())
}

pub fn level_complete(session: Res<LevelSession>) -> bool {
    level_complete_check(session.phase())
}
