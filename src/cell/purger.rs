//! The hunting variant.
//!
//! A purger strikes every living disease or chaos neighbor dead each
//! living tick and rewards itself one health per kill, up to a hard cap
//! above its starting health.

use super::{Cell, CellKind, Effect, NeighborhoodSnapshot};

pub const INITIAL_HEALTH: u32 = 5;

/// Kill rewards accumulate up to this cap, past the resting maximum.
pub const MAX_HEALTH: u32 = 10;

/// Never lowered while infected.
pub const DEATH_THRESHOLD: usize = 5;

/// Health gained per neighbor destroyed.
pub const KILL_REWARD: u32 = 1;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.4;

/// Kinds a purger hunts.
pub const PREY: [CellKind; 2] = [CellKind::Disease, CellKind::Chaos];

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    let effects: Vec<Effect> = hood
        .living()
        .filter(|n| PREY.contains(&n.kind))
        .map(|n| Effect::Strike { target: n.index })
        .collect();
    for _ in &effects {
        cell.heal(KILL_REWARD, MAX_HEALTH);
    }
    cell.assign_next_state(hood.living_count(), DEATH_THRESHOLD);
    effects
}
