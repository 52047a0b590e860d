//! The color-cycling variant.
//!
//! A chameleon steps through its resting palette every living tick.
//! While dead it watches for kin: two or more living chameleon
//! neighbors pull it back to life with full health.

use super::{Cell, CellKind, Effect, NeighborhoodSnapshot, Variant};
use crate::color::Color;

pub const INITIAL_HEALTH: u32 = 3;

pub const DEATH_THRESHOLD: usize = 5;

/// Living chameleon neighbors required for group revival.
pub const REVIVE_NEIGHBOR_COUNT: usize = 2;

/// Resting colors, cycled one step per living tick.
pub const PALETTE: [Color; 3] = [Color::Pink, Color::Violet, Color::Teal];

pub const SPAWN_ALIVE_CHANCE: f64 = 0.5;

pub(super) fn act_alive(cell: &mut Cell, hood: &NeighborhoodSnapshot) -> Vec<Effect> {
    if let Variant::Chameleon { shade, .. } = &mut cell.variant {
        *shade = (*shade + 1) % PALETTE.len();
    }
    // The infected sentinel still wins over the freshly cycled shade.
    cell.refresh_color();
    let threshold = cell.death_threshold();
    cell.assign_next_state(hood.living_count(), threshold);
    Vec::new()
}

pub(super) fn act_dead(cell: &mut Cell, hood: &NeighborhoodSnapshot) {
    let kin = hood
        .living()
        .filter(|n| n.kind == CellKind::Chameleon)
        .count();
    if kin >= REVIVE_NEIGHBOR_COUNT {
        cell.receive_revival();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{living_neighbor, snapshot_of};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn test_cycles_palette_each_living_tick() {
        let mut cell = Cell::new(CellKind::Chameleon, true);
        let hood = snapshot_of(Vec::new());
        let mut seen = Vec::new();
        for _ in 0..PALETTE.len() {
            cell.act(&hood, &mut rng());
            cell.update_state();
            seen.push(cell.color());
        }
        assert_eq!(seen, vec![PALETTE[1], PALETTE[2], PALETTE[0]]);
    }

    #[test]
    fn test_group_revival_restores_full_health() {
        let mut cell = Cell::new(CellKind::Chameleon, false);
        cell.take_damage(INITIAL_HEALTH);
        let hood = snapshot_of(vec![
            living_neighbor(0, CellKind::Chameleon),
            living_neighbor(1, CellKind::Chameleon),
        ]);
        cell.act(&hood, &mut rng());
        cell.update_state();
        assert!(cell.is_alive());
        assert_eq!(cell.health(), Some(INITIAL_HEALTH));
    }

    #[test]
    fn test_no_revival_with_single_kin() {
        let mut cell = Cell::new(CellKind::Chameleon, false);
        let hood = snapshot_of(vec![
            living_neighbor(0, CellKind::Chameleon),
            living_neighbor(1, CellKind::Purger),
        ]);
        cell.act(&hood, &mut rng());
        cell.update_state();
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_dies_at_threshold() {
        let mut cell = Cell::new(CellKind::Chameleon, true);
        let hood = snapshot_of(
            (0..DEATH_THRESHOLD)
                .map(|i| living_neighbor(i, CellKind::Mycoplasma))
                .collect(),
        );
        cell.act(&hood, &mut rng());
        assert!(!cell.will_live());
    }
}
