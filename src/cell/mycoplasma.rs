//! The plain variant: a classic two-sided Conway cell.
//!
//! Mycoplasma has no health and ignores disease entirely. It is the
//! only variant with an underpopulation clause: it dies below 2 living
//! neighbors, survives on exactly 2 while already alive, comes alive on
//! exactly 3 regardless of prior state, and dies above 3.

use super::{Cell, Effect, NeighborhoodSnapshot};

/// Living-neighbor count at which overcrowding kills (n > 3 dies).
pub const OVERCROWD_THRESHOLD: usize = 4;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.5;

/// The classic rule as a pure function of prior state and count.
pub fn next_state(alive: bool, living: usize) -> bool {
    living == 3 || (alive && living == 2)
}

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    cell.set_next_state(next_state(true, hood.living_count()));
    Vec::new()
}

pub(super) fn act_dead(cell: &mut Cell, hood: &NeighborhoodSnapshot) {
    cell.set_next_state(next_state(false, hood.living_count()));
}
