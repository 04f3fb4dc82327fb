use bevy_ecs::message::MessageWriter;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use super::commands::SessionCommand;
use super::state::LevelSession;

/// Seconds on the clock when an item becomes active at the given level.
/// Shrinks by 2 per level with a floor of 10 seconds.
pub fn initial_timer_for(level: u32) -> u32 {
    (30 - 2 * (i64::from(level) - 1)).max(10) as u32
}

/// Per-item countdown resource.
///
/// Armed when an item becomes active, cancelled on resolution. Expires at
/// most once per arming: the tick that reaches zero deactivates the clock,
/// so extra ticks delivered after expiry are no-ops.
#[derive(Resource, Debug, Default)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Arm the countdown at `seconds`. Re-arming replaces any previous state.
    pub fn arm(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.active = seconds > 0;
    }

    /// Stop the countdown. Safe to call repeatedly or when never armed.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance by one second. Returns true exactly on the tick that reaches
    /// zero; the countdown deactivates itself at that point.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// System that advances the active item's countdown by one second and turns
/// expiry into a `Timeout` command for the applicator. Gated on `item_active`,
/// so it never runs while feedback is pending or the session is idle.
pub fn tick_countdown(
    mut countdown: ResMut<Countdown>,
    mut commands: MessageWriter<SessionCommand>,
) {
    if countdown.tick() {
        commands.write(SessionCommand::Timeout);
    }
}

/// System that accounts one second of play time on the session. Runs in
/// `TickPhase::Last` so the tick that completes a level still counts.
pub fn advance_session_time(mut session: ResMut<LevelSession>) {
    session.tick_time();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_shrinks_with_level_down_to_floor() {
        assert_eq!(initial_timer_for(1), 30);
        assert_eq!(initial_timer_for(2), 28);
        assert_eq!(initial_timer_for(5), 22);
        assert_eq!(initial_timer_for(10), 12);
        assert_eq!(initial_timer_for(11), 10);
        assert_eq!(initial_timer_for(20), 10);
        assert_eq!(initial_timer_for(100), 10);
    }

    #[test]
    fn countdown_expires_exactly_once() {
        let mut countdown = Countdown::idle();
        countdown.arm(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        // Ticks after expiry are no-ops.
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(!countdown.is_active());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut countdown = Countdown::idle();
        countdown.arm(5);
        countdown.cancel();
        countdown.cancel();
        assert!(!countdown.is_active());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 5);
    }

    #[test]
    fn rearming_restarts_the_clock() {
        let mut countdown = Countdown::idle();
        countdown.arm(2);
        assert!(!countdown.tick());
        countdown.arm(10);
        assert_eq!(countdown.remaining(), 10);
        assert!(countdown.is_active());
    }

    #[test]
    fn never_armed_countdown_never_fires() {
        let mut countdown = Countdown::idle();
        for _ in 0..100 {
            assert!(!countdown.tick());
        }
    }
}
