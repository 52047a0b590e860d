//! Configuration for a simulation run.

use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a simulation.
///
/// Per-variant tuning values (initial health, death thresholds, spawn
/// probabilities, palettes) are named constants in each variant's
/// module under `cell`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of grid rows.
    pub depth: usize,

    /// Number of grid columns.
    pub width: usize,

    /// Maximum number of disease cells the creator produces per run.
    pub disease_cell_cap: usize,

    /// Master seed for the run's random stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth: 32,
            width: 48,
            disease_cell_cap: 80,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Total number of grid slots.
    pub fn slots(&self) -> usize {
        self.depth * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.depth, 32);
        assert_eq!(config.width, 48);
        assert_eq!(config.disease_cell_cap, 80);
        assert_eq!(config.slots(), 32 * 48);
    }
}
