pub mod app;
pub mod clock;
pub mod commands;
pub mod conditions;
pub mod events;
pub mod resources;
pub mod sampler;
pub mod schedule;
pub mod state;

pub use app::{build_session_app, build_session_app_seeded};
pub use clock::{Countdown, initial_timer_for};
pub use commands::{SessionCommand, apply_session_commands};
pub use conditions::{awaiting_feedback, item_active, level_complete};
pub use events::SessionEvent;
pub use resources::{ItemPool, SessionConfig, SessionRng};
pub use sampler::sample_level_items;
pub use schedule::{SessionTick, TickPhase, configure_session_schedule};
pub use state::{
    CORRECT_DROP_REWARD, DismissOutcome, ITEMS_PER_LEVEL, LevelSession, SessionPhase,
};
