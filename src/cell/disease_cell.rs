//! The infectious variant.
//!
//! A disease cell spreads a fresh infection to every susceptible living
//! neighbor each living tick. Once at least three of its living
//! neighbors are infected, the infections it hands out carry bonus
//! damage. It tolerates heavy crowding but dies of old age, and the
//! creator caps how many exist per run.

use super::{Cell, Effect, NeighborhoodSnapshot, Variant};

pub const INITIAL_HEALTH: u32 = 5;

/// Never lowered while infected; the source of disease does not sicken.
pub const DEATH_THRESHOLD: usize = 8;

/// Living ticks before the cell dies of old age.
pub const MAX_AGE: u32 = 20;

/// Living infected neighbors required before handed-out infections
/// carry bonus damage.
pub const BONUS_INFECTEE_COUNT: usize = 3;

/// Bonus damage on infections once the infectee count is reached.
pub const BONUS_DAMAGE: u32 = 1;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.9;

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    let infectees = hood.living().filter(|n| n.infection.is_some()).count();
    let bonus = if infectees >= BONUS_INFECTEE_COUNT {
        BONUS_DAMAGE
    } else {
        0
    };

    let effects: Vec<Effect> = hood
        .neighbors
        .iter()
        .filter(|n| n.is_susceptible())
        .map(|n| Effect::Infect {
            target: n.index,
            bonus,
        })
        .collect();

    let expired = {
        let Variant::Disease { age, .. } = &mut cell.variant else {
            return effects;
        };
        *age += 1;
        *age > MAX_AGE
    };

    if expired {
        cell.set_next_state(false);
    } else {
        cell.assign_next_state(hood.living_count(), DEATH_THRESHOLD);
    }
    effects
}
