//! The curative variant.
//!
//! Every living tick it clears its own infection and emits a cure for
//! each living neighbor. The death threshold is read before the
//! self-cure, so the tick a cleansing cell catches a disease it still
//! fights at the lowered threshold.

use super::{Cell, Effect, NeighborhoodSnapshot};

pub const INITIAL_HEALTH: u32 = 4;

pub const DEATH_THRESHOLD: usize = 4;

pub const SPAWN_ALIVE_CHANCE: f64 = 0.5;

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    let threshold = cell.death_threshold();
    cell.receive_cure();
    let effects = hood
        .living()
        .map(|n| Effect::Cure { target: n.index })
        .collect();
    cell.assign_next_state(hood.living_count(), threshold);
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{living_neighbor, snapshot_of, CellKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    #[test]
    fn test_cures_every_living_neighbor() {
        let mut cell = Cell::new(CellKind::Cleansing, true);
        let mut corpse = living_neighbor(2, CellKind::Chaos);
        corpse.alive = false;
        let hood = snapshot_of(vec![
            living_neighbor(0, CellKind::Evolving),
            living_neighbor(1, CellKind::Mycoplasma),
            corpse,
        ]);
        let effects = cell.act(&hood, &mut rng());
        assert_eq!(
            effects,
            vec![Effect::Cure { target: 0 }, Effect::Cure { target: 1 }]
        );
    }

    #[test]
    fn test_cures_itself_after_taking_the_tick_damage() {
        let mut cell = Cell::new(CellKind::Cleansing, true);
        cell.receive_infection(0);
        let hood = snapshot_of(Vec::new());
        cell.act(&hood, &mut rng());
        assert!(cell.disease().is_none());
        // The infection still dealt its damage before the cure.
        assert_eq!(cell.health(), Some(INITIAL_HEALTH - 1));
    }

    #[test]
    fn test_fights_at_lowered_threshold_on_the_sick_tick() {
        let mut cell = Cell::new(CellKind::Cleansing, true);
        cell.receive_infection(0);
        let hood = snapshot_of(
            (0..DEATH_THRESHOLD - 1)
                .map(|i| living_neighbor(i, CellKind::Mycoplasma))
                .collect(),
        );
        cell.act(&hood, &mut rng());
        // 3 living neighbors, threshold 4 - 1 = 3 while infected.
        assert!(!cell.will_live());
    }
}
