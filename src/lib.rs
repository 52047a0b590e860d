//! Grid-based cellular-automaton simulation engine.
//!
//! A population of typed cells on a fixed 2D field, evolving
//! generation by generation under type-specific rules: health, aging,
//! infectious disease spread, and probabilistic behavior. Rendering is
//! a consumer concern; the engine only exposes advancing a generation
//! and reading each slot's occupant.

pub mod ascii;
pub mod cell;
pub mod color;
pub mod config;
pub mod creator;
pub mod disease;
pub mod field;
pub mod simulator;
pub mod stats;

pub use cell::{Cell, CellKind, Effect};
pub use color::Color;
pub use config::SimConfig;
pub use creator::CellCreator;
pub use disease::Disease;
pub use field::Field;
pub use simulator::Simulator;
pub use stats::PopulationStats;
