//! The unpredictable variant.
//!
//! Every living tick rolls one of four weighted outcomes: self-destruct,
//! revive every dead neighbor, strike every living neighbor, or behave
//! normally. While dead it has a small chance to claw itself back to
//! life with full health. Outcome selection is a pure function of a
//! uniform roll so the thresholds stay testable.

use rand::Rng;

use super::{Cell, Effect, NeighborhoodSnapshot};

pub const INITIAL_HEALTH: u32 = 5;

pub const DEATH_THRESHOLD: usize = 5;

pub const SELF_DESTRUCT_CHANCE: f64 = 0.05;
pub const REVIVE_CHANCE: f64 = 0.10;
pub const STRIKE_CHANCE: f64 = 0.10;

/// Chance per dead tick to self-revive with full health.
pub const DEAD_REVIVE_CHANCE: f64 = 0.15;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.4;

/// One living tick's rolled behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChaosOutcome {
    SelfDestruct,
    ReviveNeighbors,
    StrikeNeighbors,
    Normal,
}

impl ChaosOutcome {
    /// Map a uniform roll in `[0, 1)` onto the weighted outcomes.
    pub fn from_roll(roll: f64) -> Self {
        if roll < SELF_DESTRUCT_CHANCE {
            ChaosOutcome::SelfDestruct
        } else if roll < SELF_DESTRUCT_CHANCE + REVIVE_CHANCE {
            ChaosOutcome::ReviveNeighbors
        } else if roll < SELF_DESTRUCT_CHANCE + REVIVE_CHANCE + STRIKE_CHANCE {
            ChaosOutcome::StrikeNeighbors
        } else {
            ChaosOutcome::Normal
        }
    }
}

pub(super) fn act_alive(
    cell: &mut Cell,
    hood: &NeighborhoodSnapshot,
    rng: &mut impl Rng,
) -> Vec<Effect> {
    let outcome = ChaosOutcome::from_roll(rng.gen::<f64>());
    apply_outcome(cell, hood, outcome)
}

/// Resolve one rolled outcome. Split from the roll itself so tests can
/// drive each branch deterministically.
pub(super) fn apply_outcome(
    cell: &mut Cell,
    hood: &NeighborhoodSnapshot,
    outcome: ChaosOutcome,
) -> Vec<Effect> {
    match outcome {
        ChaosOutcome::SelfDestruct => {
            cell.set_next_state(false);
            Vec::new()
        }
        ChaosOutcome::ReviveNeighbors => {
            let effects = hood
                .neighbors
                .iter()
                .filter(|n| !n.alive)
                .map(|n| Effect::Revive { target: n.index })
                .collect();
            let threshold = cell.death_threshold();
            cell.assign_next_state(hood.living_count(), threshold);
            effects
        }
        ChaosOutcome::StrikeNeighbors => {
            let effects = hood
                .living()
                .map(|n| Effect::Strike { target: n.index })
                .collect();
            let threshold = cell.death_threshold();
            cell.assign_next_state(hood.living_count(), threshold);
            effects
        }
        ChaosOutcome::Normal => {
            let threshold = cell.death_threshold();
            cell.assign_next_state(hood.living_count(), threshold);
            Vec::new()
        }
    }
}

/// Whether a uniform roll in `[0, 1)` grants a dead-tick self-revival.
pub fn revives(roll: f64) -> bool {
    roll < DEAD_REVIVE_CHANCE
}

pub(super) fn act_dead(cell: &mut Cell, rng: &mut impl Rng) {
    apply_dead_roll(cell, rng.gen::<f64>());
}

/// Resolve one dead tick's roll. Split from the roll itself so tests
/// can drive both branches deterministically.
pub(super) fn apply_dead_roll(cell: &mut Cell, roll: f64) {
    if revives(roll) {
        cell.receive_revival();
    }
}
