use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use crate::model::{Language, WasteItem};

use super::clock::{Countdown, advance_session_time, tick_countdown};
use super::commands::{SessionCommand, apply_session_commands};
use super::conditions::item_active;
use super::events::SessionEvent;
use super::resources::{ItemPool, SessionConfig, SessionRng};
use super::schedule::{SessionTick, TickPhase, configure_session_schedule};
use super::state::LevelSession;

/// Build a headless session app over the given item pool.
///
/// The app owns the level state machine, the per-item countdown, and the
/// command applicator. The host runs one tick per second of wall time:
/// ```no_run
/// # use ecosort::model::Language;
/// # use ecosort::session::{SessionTick, build_session_app};
/// let mut app = build_session_app(Language::De, Vec::new());
/// app.world_mut().run_schedule(SessionTick); // once per second
/// ```
/// Nothing starts until a `SessionCommand::StartLevel` arrives.
pub fn build_session_app(language: Language, pool: Vec<WasteItem>) -> App {
    build_session_app_seeded(language, pool, 42)
}

/// Build a headless session app with a specific sampling seed, for
/// reproducible item sequences.
pub fn build_session_app_seeded(language: Language, pool: Vec<WasteItem>, seed: u64) -> App {
    let mut app = App::empty();

    // Core resources. The session is single-owner UI state, so the schedule
    // runs single-threaded.
    app.insert_resource(LevelSession::idle(language));
    app.insert_resource(Countdown::idle());
    app.insert_resource(SessionRng::seeded(seed));
    app.insert_resource(ItemPool(pool));
    app.insert_resource(SessionConfig::default());

    // Register message types
    MessageRegistry::register_message::<SessionCommand>(app.world_mut());
    MessageRegistry::register_message::<SessionEvent>(app.world_mut());

    // Build schedule with message rotation + countdown + applicator
    let mut schedule = configure_session_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        bevy_ecs::message::message_update_system.in_set(TickPhase::PreUpdate),
    );
    schedule.add_systems(
        tick_countdown
            .run_if(item_active)
            .in_set(TickPhase::Update),
    );
    schedule.add_systems(apply_session_commands.in_set(TickPhase::PostUpdate));
    schedule.add_systems(advance_session_time.in_set(TickPhase::Last));
    app.add_schedule(schedule);
    app
}
