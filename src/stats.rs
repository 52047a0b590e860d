//! Per-generation population metrics.
//!
//! Counts living cells by kind plus the infected total, for the
//! consumers that chart population over time.

use serde::Serialize;

use crate::cell::CellKind;
use crate::field::Field;
use crate::simulator::Simulator;

/// Living population broken down by kind for one generation.
#[derive(Clone, Debug, Serialize)]
pub struct PopulationStats {
    pub generation: u32,
    pub living: usize,
    pub infected: usize,
    pub mycoplasma: usize,
    pub disease: usize,
    pub chameleon: usize,
    pub chaos: usize,
    pub cleansing: usize,
    pub evolving: usize,
    pub purger: usize,
}

impl PopulationStats {
    pub fn compute(sim: &Simulator) -> Self {
        Self::from_field(sim.field(), sim.generation())
    }

    pub fn from_field(field: &Field, generation: u32) -> Self {
        let mut stats = Self {
            generation,
            living: 0,
            infected: 0,
            mycoplasma: 0,
            disease: 0,
            chameleon: 0,
            chaos: 0,
            cleansing: 0,
            evolving: 0,
            purger: 0,
        };
        for (_, _, slot) in field.iter() {
            let Some(cell) = slot else { continue };
            if !cell.is_alive() {
                continue;
            }
            stats.living += 1;
            if cell.disease().is_some() {
                stats.infected += 1;
            }
            match cell.kind() {
                CellKind::Mycoplasma => stats.mycoplasma += 1,
                CellKind::Disease => stats.disease += 1,
                CellKind::Chameleon => stats.chameleon += 1,
                CellKind::Chaos => stats.chaos += 1,
                CellKind::Cleansing => stats.cleansing += 1,
                CellKind::Evolving => stats.evolving += 1,
                CellKind::Purger => stats.purger += 1,
            }
        }
        stats
    }

    pub fn living_of(&self, kind: CellKind) -> usize {
        match kind {
            CellKind::Mycoplasma => self.mycoplasma,
            CellKind::Disease => self.disease,
            CellKind::Chameleon => self.chameleon,
            CellKind::Chaos => self.chaos,
            CellKind::Cleansing => self.cleansing,
            CellKind::Evolving => self.evolving,
            CellKind::Purger => self.purger,
        }
    }

    /// One-line human summary for progress reporting.
    pub fn report(&self) -> String {
        format!(
            "gen {}: {} living ({} infected) | myco {}, disease {}, chameleon {}, \
             chaos {}, cleansing {}, evolving {}, purger {}",
            self.generation,
            self.living,
            self.infected,
            self.mycoplasma,
            self.disease,
            self.chameleon,
            self.chaos,
            self.cleansing,
            self.evolving,
            self.purger,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_counts_only_living_cells() {
        let mut field = Field::new(2, 3);
        field.place(0, 0, Cell::new(CellKind::Mycoplasma, true));
        field.place(0, 1, Cell::new(CellKind::Mycoplasma, false));
        field.place(0, 2, Cell::new(CellKind::Purger, true));
        field.place(1, 0, Cell::new(CellKind::Chameleon, true));
        field.recompute_neighbours();

        let stats = PopulationStats::from_field(&field, 3);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.living, 3);
        assert_eq!(stats.mycoplasma, 1);
        assert_eq!(stats.purger, 1);
        assert_eq!(stats.chameleon, 1);
        assert_eq!(stats.living_of(CellKind::Disease), 0);
    }

    #[test]
    fn test_infected_total() {
        let mut field = Field::new(1, 2);
        let mut sick = Cell::new(CellKind::Evolving, true);
        sick.receive_infection(0);
        field.place(0, 0, sick);
        field.place(0, 1, Cell::new(CellKind::Evolving, true));
        field.recompute_neighbours();

        let stats = PopulationStats::from_field(&field, 0);
        assert_eq!(stats.infected, 1);
        assert_eq!(stats.evolving, 2);
    }

    #[test]
    fn test_report_mentions_every_kind() {
        let field = Field::new(1, 1);
        let report = PopulationStats::from_field(&field, 0).report();
        for kind in ["myco", "disease", "chameleon", "chaos", "cleansing", "evolving", "purger"] {
            assert!(report.contains(kind), "missing {kind}");
        }
    }
}
