//! Quota-aware random cell factory.
//!
//! Disease cells get a priority quota: every request is answered with a
//! disease cell until the per-run cap is reached, after which requests
//! pick uniformly among the remaining kinds. The count lives here, on
//! simulation-scoped state, and is reset exactly once per run. There is
//! no second counter anywhere.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::{Cell, CellKind};

/// Ordered factory for one simulation run's population.
pub struct CellCreator {
    disease_cap: usize,
    disease_count: usize,
}

impl CellCreator {
    pub fn new(disease_cap: usize) -> Self {
        Self {
            disease_cap,
            disease_count: 0,
        }
    }

    /// Disease cells produced so far this run.
    pub fn disease_count(&self) -> usize {
        self.disease_count
    }

    /// Zero the quota counter for a fresh run.
    pub fn reset(&mut self) {
        self.disease_count = 0;
    }

    /// Produce exactly one new cell. Never fails: an empty pick falls
    /// back to the plain variant rather than aborting population.
    pub fn create(&mut self, rng: &mut impl Rng) -> Cell {
        let kind = if self.disease_count < self.disease_cap {
            self.disease_count += 1;
            CellKind::Disease
        } else {
            CellKind::COMMON
                .choose(rng)
                .copied()
                .unwrap_or(CellKind::Mycoplasma)
        };
        let alive = rng.gen_bool(kind.spawn_alive_chance());
        Cell::new(kind, alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quota_split_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut creator = CellCreator::new(80);
        let cells: Vec<Cell> = (0..200).map(|_| creator.create(&mut rng)).collect();

        let disease = cells
            .iter()
            .filter(|c| c.kind() == CellKind::Disease)
            .count();
        assert_eq!(disease, 80);
        assert_eq!(creator.disease_count(), 80);
        // The first 80 requests are all disease cells.
        assert!(cells[..80].iter().all(|c| c.kind() == CellKind::Disease));
    }

    #[test]
    fn test_reset_restores_the_quota() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut creator = CellCreator::new(3);
        for _ in 0..10 {
            creator.create(&mut rng);
        }
        assert_eq!(creator.disease_count(), 3);

        creator.reset();
        assert_eq!(creator.disease_count(), 0);
        assert_eq!(creator.create(&mut rng).kind(), CellKind::Disease);
    }

    #[test]
    fn test_post_quota_picks_are_never_disease() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut creator = CellCreator::new(0);
        for _ in 0..100 {
            assert_ne!(creator.create(&mut rng).kind(), CellKind::Disease);
        }
    }

    #[test]
    fn test_every_common_kind_shows_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let mut creator = CellCreator::new(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(creator.create(&mut rng).kind());
        }
        for kind in CellKind::COMMON {
            assert!(seen.contains(&kind), "missing {}", kind.name());
        }
    }
}
