//! Infection value object.
//!
//! A `Disease` is immutable once constructed: the bonus is supplied by
//! the infecting source at the moment of infection and frozen. Passing
//! an infection from one cell to another derives a *new* `Disease` from
//! the bonus alone, so two infected cells never hold the same instance
//! and curing one cannot affect the other.

/// Damage every infection deals per generation before any bonus.
pub const BASE_DAMAGE: u32 = 1;

/// An active infection. Deals `BASE_DAMAGE + bonus` per generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disease {
    bonus: u32,
}

impl Disease {
    /// Create an infection with the given bonus damage.
    pub fn new(bonus: u32) -> Self {
        Self { bonus }
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Damage dealt to the carrier each generation.
    pub fn damage(&self) -> u32 {
        BASE_DAMAGE + self.bonus
    }

    /// Derive a fresh infection for a new victim, carrying only the bonus.
    pub fn rederive(&self) -> Disease {
        Disease::new(self.bonus)
    }
}
