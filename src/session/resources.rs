use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::WasteItem;
use super::state::{CORRECT_DROP_REWARD, ITEMS_PER_LEVEL};

/// RNG used for item sampling, seeded per session so play sequences are
/// reproducible in tests.
#[derive(Resource)]
pub struct SessionRng {
    pub rng: SmallRng,
    pub seed: u64,
}

impl SessionRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }
}

/// The item pool the provider supplied for this session. Read-only; every
/// level start samples a fresh subset from it.
#[derive(Resource, Debug, Default)]
pub struct ItemPool(pub Vec<WasteItem>);

/// Tunables injected at session construction instead of read from ambient
/// globals.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SessionConfig {
    pub items_per_level: usize,
    pub reward: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            items_per_level: ITEMS_PER_LEVEL,
            reward: CORRECT_DROP_REWARD,
        }
    }
}
