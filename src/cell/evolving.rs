//! The age-banded variant.
//!
//! An evolving cell moves through three life stages, each with its own
//! color and death threshold. It only ages while uninfected, so a
//! lingering disease freezes it in its current stage.

use super::{Cell, Effect, NeighborhoodSnapshot, Variant};
use crate::color::Color;

pub const INITIAL_HEALTH: u32 = 2;

/// Last age (in living ticks) counted as young.
pub const STAGE_YOUNG_MAX: u32 = 4;

/// Last age counted as mature; anything older is elderly.
pub const STAGE_MATURE_MAX: u32 = 14;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.6;

/// Age-derived life stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Young,
    Mature,
    Elderly,
}

impl Stage {
    pub fn from_age(age: u32) -> Self {
        if age <= STAGE_YOUNG_MAX {
            Stage::Young
        } else if age <= STAGE_MATURE_MAX {
            Stage::Mature
        } else {
            Stage::Elderly
        }
    }

    pub fn color(self) -> Color {
        match self {
            Stage::Young => Color::YellowGreen,
            Stage::Mature => Color::Goldenrod,
            Stage::Elderly => Color::Sienna,
        }
    }

    /// Base death threshold, before the infected adjustment.
    pub fn base_threshold(self) -> usize {
        match self {
            Stage::Young => 2,
            Stage::Mature => 4,
            Stage::Elderly => 7,
        }
    }
}

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    if cell.disease().is_none() {
        if let Variant::Evolving { age, .. } = &mut cell.variant {
            *age += 1;
        }
        // Crossing a stage boundary changes the resting color.
        cell.refresh_color();
    }
    let threshold = cell.death_threshold();
    cell.assign_next_state(hood.living_count(), threshold);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{living_neighbor, snapshot_of, CellKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(9)
    }

    #[test]
    fn test_stage_bands() {
        assert_eq!(Stage::from_age(0), Stage::Young);
        assert_eq!(Stage::from_age(STAGE_YOUNG_MAX), Stage::Young);
        assert_eq!(Stage::from_age(STAGE_YOUNG_MAX + 1), Stage::Mature);
        assert_eq!(Stage::from_age(STAGE_MATURE_MAX), Stage::Mature);
        assert_eq!(Stage::from_age(STAGE_MATURE_MAX + 1), Stage::Elderly);
    }

    #[test]
    fn test_stage_thresholds() {
        assert_eq!(Stage::Young.base_threshold(), 2);
        assert_eq!(Stage::Mature.base_threshold(), 4);
        assert_eq!(Stage::Elderly.base_threshold(), 7);
    }

    #[test]
    fn test_matures_and_changes_color() {
        let mut cell = Cell::new(CellKind::Evolving, true);
        let hood = snapshot_of(Vec::new());
        assert_eq!(cell.color(), Stage::Young.color());
        for _ in 0..=STAGE_YOUNG_MAX {
            cell.act(&hood, &mut rng());
            cell.update_state();
        }
        assert_eq!(cell.color(), Stage::Mature.color());
        assert_eq!(cell.death_threshold(), Stage::Mature.base_threshold());
    }

    #[test]
    fn test_infection_freezes_aging() {
        let mut cell = Cell::new(CellKind::Evolving, true);
        cell.heal(10, 20); // enough health to outlast the disease ticks
        cell.receive_infection(0);
        let hood = snapshot_of(Vec::new());
        for _ in 0..3 {
            cell.act(&hood, &mut rng());
            cell.update_state();
        }
        // Still young: no tick aged it while infected.
        assert_eq!(cell.death_threshold(), Stage::Young.base_threshold() - 1);
    }

    #[test]
    fn test_young_cell_dies_at_two_neighbors() {
        let mut cell = Cell::new(CellKind::Evolving, true);
        let hood = snapshot_of(vec![
            living_neighbor(0, CellKind::Mycoplasma),
            living_neighbor(1, CellKind::Mycoplasma),
        ]);
        cell.act(&hood, &mut rng());
        assert!(!cell.will_live());
    }
}
