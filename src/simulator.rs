//! Top-level simulation driver.
//!
//! Owns the field, the creator, the random stream and the generation
//! counter. A generation is one pass over the population order: each
//! cell acts, its immediate effects land, and its pending state commits
//! before the next cell acts. That per-cell act+commit ordering is
//! deliberate and part of the semantics: cross-cell interactions are
//! order-sensitive within a generation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::creator::CellCreator;
use crate::field::Field;

/// The simulation engine exposed to external consumers.
pub struct Simulator {
    field: Field,
    creator: CellCreator,
    rng: ChaCha8Rng,
    /// Shuffled slot order; population iteration order for every
    /// generation of the run.
    order: Vec<usize>,
    generation: u32,
}

impl Simulator {
    /// Build and seed a simulator from a config. The grid is populated
    /// immediately.
    pub fn new(config: &SimConfig) -> Self {
        let field = Field::new(config.depth, config.width);
        let order = (0..config.slots()).collect();
        let mut sim = Self {
            field,
            creator: CellCreator::new(config.disease_cell_cap),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            order,
            generation: 0,
        };
        sim.reset();
        sim
    }

    /// Start a fresh run: restore the creator's quota, then repopulate.
    pub fn reset(&mut self) {
        self.creator.reset();
        self.populate();
    }

    /// Clear the field and fill every slot with a freshly created cell.
    /// Coordinates are visited in shuffled order so the disease quota
    /// does not correlate with grid position; the shuffle also becomes
    /// the population iteration order for the run.
    pub fn populate(&mut self) {
        self.field.clear();
        self.order.shuffle(&mut self.rng);
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let cell = self.creator.create(&mut self.rng);
            self.field.place_at(idx, cell);
        }
        self.generation = 0;
        self.field.recompute_neighbours();
    }

    /// Advance one generation: act + commit per cell in population
    /// order, then bump the counter and rebuild neighbor lists.
    pub fn sim_one_generation(&mut self) {
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let hood = self.field.neighborhood(idx);
            let effects = match self.field.cell_at_mut(idx) {
                Some(cell) => cell.act(&hood, &mut self.rng),
                None => continue,
            };
            self.field.apply(&effects);
            if let Some(cell) = self.field.cell_at_mut(idx) {
                cell.update_state();
            }
        }
        self.generation += 1;
        self.field.recompute_neighbours();
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn depth(&self) -> usize {
        self.field.depth()
    }

    pub fn width(&self) -> usize {
        self.field.width()
    }

    /// Test-only: wrap an already-built field with a fixed row-major
    /// population order, so scenarios can pin iteration order.
    #[cfg(test)]
    pub(crate) fn with_field(field: Field, seed: u64) -> Self {
        let order = (0..field.len()).collect();
        Self {
            field,
            creator: CellCreator::new(0),
            rng: ChaCha8Rng::seed_from_u64(seed),
            order,
            generation: 0,
        }
    }
}
