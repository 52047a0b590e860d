//! The 2D grid of cell slots.
//!
//! The field owns the slots, resolves Moore adjacency, and is the sole
//! authority on a cell's logical position; cells never learn where
//! they sit. Boundary policy is clipped edges: the grid does not wrap,
//! so edge and corner slots simply have fewer neighbors.

use crate::cell::{Cell, Effect, NeighborView, NeighborhoodSnapshot};

/// Moore neighborhood offsets (row, col), fixed iteration order.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed `depth x width` grid. Each slot holds zero or one cell; the
/// engine never removes an occupant, only toggles it through its alive
/// flag, so a dead cell stays in its slot as a revival candidate.
pub struct Field {
    depth: usize,
    width: usize,
    slots: Vec<Option<Cell>>,
    /// Per-slot indices of occupied adjacent slots, rebuilt once per
    /// generation after all commits.
    adjacency: Vec<Vec<usize>>,
}

impl Field {
    /// Create an empty field. Zero-size dimensions are a programming
    /// error and fail fast.
    pub fn new(depth: usize, width: usize) -> Self {
        assert!(depth > 0 && width > 0, "field dimensions must be positive");
        Self {
            depth,
            width,
            slots: vec![None; depth * width],
            adjacency: vec![Vec::new(); depth * width],
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.depth && col < self.width, "slot out of bounds");
        row * self.width + col
    }

    /// Empty every slot and drop the stale adjacency lists.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        for list in &mut self.adjacency {
            list.clear();
        }
    }

    /// Put a cell into a slot, replacing any previous occupant.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.slots[idx] = Some(cell);
    }

    pub(crate) fn place_at(&mut self, idx: usize, cell: Cell) {
        self.slots[idx] = Some(cell);
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.slots[self.index(row, col)].as_ref()
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        let idx = self.index(row, col);
        self.slots[idx].as_mut()
    }

    pub(crate) fn cell_at_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.slots[idx].as_mut()
    }

    /// Iterate over all slots with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<&Cell>)> {
        self.slots.iter().enumerate().map(move |(idx, slot)| {
            let row = idx / self.width;
            let col = idx % self.width;
            (row, col, slot.as_ref())
        })
    }

    /// Indices of the up-to-8 adjacent slots, clipped at the boundary.
    fn moore_indices(&self, row: usize, col: usize) -> Vec<usize> {
        let mut result = Vec::with_capacity(8);
        for (dr, dc) in MOORE_OFFSETS {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr >= 0 && nr < self.depth as i32 && nc >= 0 && nc < self.width as i32 {
                result.push(nr as usize * self.width + nc as usize);
            }
        }
        result
    }

    /// Rebuild every slot's neighbor list from current occupancy. Must
    /// run once per generation after all cells have committed, because
    /// occupant identity is allowed to change between generations even
    /// though this engine never replaces one.
    pub fn recompute_neighbours(&mut self) {
        for idx in 0..self.slots.len() {
            let row = idx / self.width;
            let col = idx % self.width;
            let neighbors: Vec<usize> = self
                .moore_indices(row, col)
                .into_iter()
                .filter(|&n| self.slots[n].is_some())
                .collect();
            self.adjacency[idx] = neighbors;
        }
    }

    /// Count of living neighbors, the live filter over the fixed
    /// neighbor list.
    pub fn living_neighbours(&self, row: usize, col: usize) -> usize {
        let idx = self.index(row, col);
        self.adjacency[idx]
            .iter()
            .filter(|&&n| self.slots[n].as_ref().is_some_and(|c| c.is_alive()))
            .count()
    }

    /// Snapshot of a slot's neighborhood at this instant, handed to the
    /// occupant's `act`.
    pub(crate) fn neighborhood(&self, idx: usize) -> NeighborhoodSnapshot {
        let neighbors = self.adjacency[idx]
            .iter()
            .filter_map(|&n| {
                self.slots[n].as_ref().map(|cell| {
                    let alive = cell.is_alive();
                    NeighborView {
                        index: n,
                        kind: cell.kind(),
                        alive,
                        infection: if alive { cell.disease() } else { None },
                    }
                })
            })
            .collect();
        NeighborhoodSnapshot { neighbors }
    }

    /// Apply one cell's immediate effects, in order, before the next
    /// cell acts.
    pub(crate) fn apply(&mut self, effects: &[Effect]) {
        for &effect in effects {
            match effect {
                Effect::Infect { target, bonus } => {
                    if let Some(cell) = self.slots[target].as_mut() {
                        cell.receive_infection(bonus);
                    }
                }
                Effect::Cure { target } => {
                    if let Some(cell) = self.slots[target].as_mut() {
                        cell.receive_cure();
                    }
                }
                Effect::Strike { target } => {
                    if let Some(cell) = self.slots[target].as_mut() {
                        cell.receive_strike();
                    }
                }
                Effect::Revive { target } => {
                    if let Some(cell) = self.slots[target].as_mut() {
                        cell.receive_revival();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;

    fn full_field(depth: usize, width: usize, alive: bool) -> Field {
        let mut field = Field::new(depth, width);
        for row in 0..depth {
            for col in 0..width {
                field.place(row, col, Cell::new(CellKind::Mycoplasma, alive));
            }
        }
        field.recompute_neighbours();
        field
    }

    #[test]
    #[should_panic(expected = "field dimensions must be positive")]
    fn test_zero_size_grid_fails_fast() {
        Field::new(0, 10);
    }

    #[test]
    fn test_clipped_neighbor_counts() {
        let field = full_field(3, 3, true);
        assert_eq!(field.living_neighbours(0, 0), 3); // corner
        assert_eq!(field.living_neighbours(0, 1), 5); // edge
        assert_eq!(field.living_neighbours(1, 1), 8); // interior
    }

    #[test]
    fn test_living_filter_tracks_alive_flags() {
        let mut field = full_field(3, 3, true);
        field.place(0, 0, Cell::new(CellKind::Mycoplasma, false));
        field.place(0, 1, Cell::new(CellKind::Mycoplasma, false));
        field.recompute_neighbours();
        // The fixed list still has 8 entries; only the live filter shrinks.
        assert_eq!(field.neighborhood(field.index(1, 1)).neighbors.len(), 8);
        assert_eq!(field.living_neighbours(1, 1), 6);
    }

    #[test]
    fn test_snapshot_matches_living_count() {
        let field = full_field(4, 4, true);
        for row in 0..4 {
            for col in 0..4 {
                let idx = field.index(row, col);
                assert_eq!(
                    field.neighborhood(idx).living_count(),
                    field.living_neighbours(row, col)
                );
            }
        }
    }

    #[test]
    fn test_dead_occupant_stays_in_slot() {
        let mut field = full_field(2, 2, true);
        field.cell_mut(0, 0).unwrap().receive_strike();
        field.cell_mut(0, 0).unwrap().update_state();
        assert!(field.cell(0, 0).is_some());
        assert!(!field.cell(0, 0).unwrap().is_alive());
    }

    #[test]
    fn test_apply_effects_lands_immediately() {
        let mut field = Field::new(1, 3);
        field.place(0, 0, Cell::new(CellKind::Disease, true));
        field.place(0, 1, Cell::new(CellKind::Evolving, true));
        field.place(0, 2, Cell::new(CellKind::Chaos, true));
        field.recompute_neighbours();

        field.apply(&[
            Effect::Infect { target: 1, bonus: 2 },
            Effect::Strike { target: 2 },
        ]);
        assert_eq!(
            field.cell(0, 1).unwrap().disease().map(|d| d.bonus()),
            Some(2)
        );
        assert!(!field.cell(0, 2).unwrap().is_alive());
    }

    #[test]
    fn test_clear_empties_every_slot() {
        let mut field = full_field(3, 3, true);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.living_neighbours(1, 1), 0);
    }

    #[test]
    fn test_infection_not_visible_from_dead_neighbor() {
        let mut field = Field::new(1, 2);
        let mut carrier = Cell::new(CellKind::Cleansing, true);
        carrier.receive_infection(1);
        carrier.take_damage(99); // zero health: reports dead immediately
        field.place(0, 0, carrier);
        field.place(0, 1, Cell::new(CellKind::Evolving, true));
        field.recompute_neighbours();

        let hood = field.neighborhood(field.index(0, 1));
        assert!(hood.first_infected().is_none());
    }
}
