use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one session tick (one second of game time).
/// Run manually each second via `app.world_mut().run_schedule(SessionTick)`;
/// tests drive it directly, which is what makes the countdown testable
/// without a wall clock.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionTick;

/// Ordered phases within each tick.
///
/// Systems are assigned to phases via `.in_set(TickPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Last.
/// Message rotation runs in PreUpdate, the countdown in Update, the command
/// applicator in PostUpdate, and time accounting in Last. A command
/// delivered during a tick is applied at the end of that same tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Last,
}

/// Build a configured `SessionTick` schedule with phase ordering.
pub fn configure_session_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SessionTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            TickPhase::PreUpdate,
            TickPhase::Update,
            TickPhase::PostUpdate,
            TickPhase::Last,
        )
            .chain(),
    );
    schedule
}
