//! Helpers shared by unit and integration tests, plus thin driving utilities
//! for hosts embedding the session app.

use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::id::IdGenerator;
use crate::model::{BinId, LocalizedText, WasteItem};
use crate::session::commands::SessionCommand;
use crate::session::events::SessionEvent;
use crate::session::schedule::SessionTick;

// ---------------------------------------------------------------------------
// Tick execution helpers
// ---------------------------------------------------------------------------

/// Queue a command for the applicator; it applies at the end of the next tick.
pub fn send_command(app: &mut App, cmd: SessionCommand) {
    app.world_mut()
        .resource_mut::<Messages<SessionCommand>>()
        .write(cmd);
}

/// Run one session tick (one second of game time).
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(SessionTick);
}

/// Run `n` session ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        tick(app);
    }
}

/// Drain and return all pending session events.
pub fn drain_events(app: &mut App) -> Vec<SessionEvent> {
    app.world_mut()
        .resource_mut::<Messages<SessionEvent>>()
        .drain()
        .collect()
}

// ---------------------------------------------------------------------------
// Pool builders
// ---------------------------------------------------------------------------

/// A deterministic pool of `n` items cycling through the bin catalog.
pub fn test_pool(n: u64) -> Vec<WasteItem> {
    let mut id_gen = IdGenerator::new();
    (0..n)
        .map(|k| {
            let id = id_gen.next_id();
            let bin = BinId::ALL[(k as usize) % BinId::ALL.len()];
            WasteItem::new(
                id,
                LocalizedText::new(format!("item {id}"), format!("Ding {id}")),
                LocalizedText::new(format!("about item {id}"), format!("über Ding {id}")),
                bin,
            )
        })
        .collect()
}

/// A single-bin pool, handy when a test wants every drop to hit or miss.
pub fn uniform_pool(n: u64, bin: BinId) -> Vec<WasteItem> {
    let mut id_gen = IdGenerator::new();
    (0..n)
        .map(|_| {
            let id = id_gen.next_id();
            WasteItem::new(
                id,
                LocalizedText::new(format!("item {id}"), format!("Ding {id}")),
                LocalizedText::new("", ""),
                bin,
            )
        })
        .collect()
}
