use bevy_ecs::message::{Message, Messages};
use bevy_ecs::world::World;

use crate::model::{BinId, EnrichmentToken, Resolution};

use super::clock::{Countdown, initial_timer_for};
use super::events::SessionEvent;
use super::resources::{ItemPool, SessionConfig, SessionRng};
use super::sampler::sample_level_items;
use super::state::{DismissOutcome, LevelSession};

/// An intent against the running session: player drops and dismissals, the
/// countdown's expiry, level control, and late enrichment results.
///
/// The UI and the countdown system write these via messages; the centralized
/// applicator in `TickPhase::PostUpdate` processes them in arrival order.
/// Intents that are invalid for the current phase are dropped as no-ops:
/// duplicate drop events and post-expiry ticks are expected UI races, not
/// faults.
#[derive(Message, Clone, Debug)]
pub enum SessionCommand {
    /// Sample a fresh item sequence and start the given level.
    StartLevel { level: u32 },
    /// The player dropped the active item onto a bin.
    Drop { bin: BinId },
    /// The active item's countdown ran out.
    Timeout,
    /// The player dismissed the feedback card.
    DismissFeedback,
    /// Restart the current level with a freshly sampled item sequence.
    Reset,
    /// An enrichment response arrived for the card identified by `token`.
    ApplyEnrichment {
        token: EnrichmentToken,
        message: String,
    },
}

/// Exclusive system that drains all pending `SessionCommand` messages,
/// applies them to the session, keeps the countdown in step, and emits
/// `SessionEvent` messages for the host.
///
/// Runs in `TickPhase::PostUpdate`, after the countdown has ticked, so a
/// drop and an expiry landing on the same tick resolve in arrival order and
/// the loser becomes a no-op.
pub fn apply_session_commands(world: &mut World) {
    let commands: Vec<SessionCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SessionCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let mut session = world.remove_resource::<LevelSession>().unwrap();
    let mut countdown = world.remove_resource::<Countdown>().unwrap();
    let mut rng = world.remove_resource::<SessionRng>().unwrap();
    let pool = world.remove_resource::<ItemPool>().unwrap();
    let config = *world.resource::<SessionConfig>();

    let mut events: Vec<SessionEvent> = Vec::new();

    for cmd in commands {
        match cmd {
            SessionCommand::StartLevel { level } => {
                start_level(
                    &mut session,
                    &mut countdown,
                    &mut rng,
                    &pool,
                    config,
                    level,
                    &mut events,
                );
            }
            SessionCommand::Drop { bin } => {
                resolve(
                    &mut session,
                    &mut countdown,
                    Resolution::Drop { bin },
                    &mut events,
                );
            }
            SessionCommand::Timeout => {
                resolve(&mut session, &mut countdown, Resolution::Timeout, &mut events);
            }
            SessionCommand::DismissFeedback => match session.dismiss() {
                Some(DismissOutcome::Advanced { index }) => {
                    countdown.arm(initial_timer_for(session.level()));
                    events.push(SessionEvent::ItemAdvanced { index });
                }
                Some(DismissOutcome::Completed { summary }) => {
                    countdown.cancel();
                    events.push(SessionEvent::LevelCompleted { summary });
                }
                None => {
                    tracing::debug!("ignoring dismiss in {:?}", session.phase());
                }
            },
            SessionCommand::Reset => {
                let level = session.level();
                if level == 0 {
                    tracing::debug!("reset before any level started");
                    continue;
                }
                countdown.cancel();
                start_level(
                    &mut session,
                    &mut countdown,
                    &mut rng,
                    &pool,
                    config,
                    level,
                    &mut events,
                );
            }
            SessionCommand::ApplyEnrichment { token, message } => {
                if !session.apply_enrichment(token, message) {
                    tracing::debug!("discarding stale enrichment response for {:?}", token);
                }
            }
        }
    }

    if let Some(mut messages) = world.get_resource_mut::<Messages<SessionEvent>>() {
        messages.write_batch(events);
    }

    world.insert_resource(session);
    world.insert_resource(countdown);
    world.insert_resource(rng);
    world.insert_resource(pool);
}

fn start_level(
    session: &mut LevelSession,
    countdown: &mut Countdown,
    rng: &mut SessionRng,
    pool: &ItemPool,
    config: SessionConfig,
    level: u32,
    events: &mut Vec<SessionEvent>,
) {
    if pool.0.is_empty() {
        tracing::warn!("item pool is empty; level {level} not started");
        return;
    }
    let items = sample_level_items(&pool.0, config.items_per_level, &mut rng.rng);
    let timer_seconds = initial_timer_for(level);
    if session.begin(level, items, config.reward) {
        countdown.arm(timer_seconds);
        events.push(SessionEvent::LevelStarted {
            level,
            item_count: session.items().len(),
            timer_seconds,
        });
    }
}

fn resolve(
    session: &mut LevelSession,
    countdown: &mut Countdown,
    resolution: Resolution,
    events: &mut Vec<SessionEvent>,
) {
    match session.resolve(resolution) {
        Some(token) => {
            countdown.cancel();
            let correct = session
                .pending_feedback()
                .map(|f| f.correct)
                .unwrap_or(false);
            events.push(SessionEvent::FeedbackReady { token, correct });
        }
        None => {
            tracing::debug!("ignoring {:?} in {:?}", resolution, session.phase());
        }
    }
}
