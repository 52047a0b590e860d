//! The polymorphic cell: shared state machine plus per-variant rules.
//!
//! Every cell carries the same core (current alive flag, pending alive
//! flag, display color) and a variant payload. A generation tick is
//! two steps per cell: `act` decides the pending state and emits
//! immediate cross-cell effects, `update_state` commits the pending
//! flag. The alive flag changes *only* through the commit; everything
//! that touches a neighbor's health or infection goes through the
//! [`Effect`] channel and is applied by the field right away, before
//! the next cell acts. Iteration order is therefore part of the
//! semantics.

pub mod chameleon;
pub mod chaos;
pub mod cleansing;
pub mod disease_cell;
pub mod evolving;
pub mod mycoplasma;
pub mod purger;

use rand::Rng;

use crate::color::Color;
use crate::disease::Disease;

/// Type tag for every concrete variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Mycoplasma,
    Disease,
    Chameleon,
    Chaos,
    Cleansing,
    Evolving,
    Purger,
}

impl CellKind {
    pub const ALL: [CellKind; 7] = [
        CellKind::Mycoplasma,
        CellKind::Disease,
        CellKind::Chameleon,
        CellKind::Chaos,
        CellKind::Cleansing,
        CellKind::Evolving,
        CellKind::Purger,
    ];

    /// The kinds the creator picks among once the disease quota is full.
    pub const COMMON: [CellKind; 6] = [
        CellKind::Mycoplasma,
        CellKind::Chameleon,
        CellKind::Chaos,
        CellKind::Cleansing,
        CellKind::Evolving,
        CellKind::Purger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellKind::Mycoplasma => "mycoplasma",
            CellKind::Disease => "disease",
            CellKind::Chameleon => "chameleon",
            CellKind::Chaos => "chaos",
            CellKind::Cleansing => "cleansing",
            CellKind::Evolving => "evolving",
            CellKind::Purger => "purger",
        }
    }

    /// Whether this variant can carry a disease at all.
    pub fn is_disease_capable(self) -> bool {
        !matches!(self, CellKind::Mycoplasma)
    }

    /// Starting health for the variant; `None` for the plain variant.
    pub fn initial_health(self) -> Option<u32> {
        match self {
            CellKind::Mycoplasma => None,
            CellKind::Disease => Some(disease_cell::INITIAL_HEALTH),
            CellKind::Chameleon => Some(chameleon::INITIAL_HEALTH),
            CellKind::Chaos => Some(chaos::INITIAL_HEALTH),
            CellKind::Cleansing => Some(cleansing::INITIAL_HEALTH),
            CellKind::Evolving => Some(evolving::INITIAL_HEALTH),
            CellKind::Purger => Some(purger::INITIAL_HEALTH),
        }
    }

    /// Probability that a freshly created cell of this kind starts alive.
    pub fn spawn_alive_chance(self) -> f64 {
        match self {
            CellKind::Mycoplasma => mycoplasma::SPAWN_ALIVE_CHANCE,
            CellKind::Disease => disease_cell::SPAWN_ALIVE_CHANCE,
            CellKind::Chameleon => chameleon::SPAWN_ALIVE_CHANCE,
            CellKind::Chaos => chaos::SPAWN_ALIVE_CHANCE,
            CellKind::Cleansing => cleansing::SPAWN_ALIVE_CHANCE,
            CellKind::Evolving => evolving::SPAWN_ALIVE_CHANCE,
            CellKind::Purger => purger::SPAWN_ALIVE_CHANCE,
        }
    }
}

/// Health and infection state shared by every disease-capable variant.
#[derive(Clone, Copy, Debug)]
pub struct Vitals {
    pub health: u32,
    pub disease: Option<Disease>,
}

impl Vitals {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            disease: None,
        }
    }

    /// Reduce health, clamped at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Raise health, clamped at `cap`.
    pub fn heal(&mut self, amount: u32, cap: u32) {
        self.health = (self.health + amount).min(cap);
    }
}

/// Variant payload: per-kind state beyond the shared core.
#[derive(Clone, Copy, Debug)]
pub enum Variant {
    Mycoplasma,
    Disease { vitals: Vitals, age: u32 },
    Chameleon { vitals: Vitals, shade: usize },
    Chaos { vitals: Vitals },
    Cleansing { vitals: Vitals },
    Evolving { vitals: Vitals, age: u32 },
    Purger { vitals: Vitals },
}

impl Variant {
    fn new(kind: CellKind) -> Self {
        match kind {
            CellKind::Mycoplasma => Variant::Mycoplasma,
            CellKind::Disease => Variant::Disease {
                vitals: Vitals::new(disease_cell::INITIAL_HEALTH),
                age: 0,
            },
            CellKind::Chameleon => Variant::Chameleon {
                vitals: Vitals::new(chameleon::INITIAL_HEALTH),
                shade: 0,
            },
            CellKind::Chaos => Variant::Chaos {
                vitals: Vitals::new(chaos::INITIAL_HEALTH),
            },
            CellKind::Cleansing => Variant::Cleansing {
                vitals: Vitals::new(cleansing::INITIAL_HEALTH),
            },
            CellKind::Evolving => Variant::Evolving {
                vitals: Vitals::new(evolving::INITIAL_HEALTH),
                age: 0,
            },
            CellKind::Purger => Variant::Purger {
                vitals: Vitals::new(purger::INITIAL_HEALTH),
            },
        }
    }

    fn kind(&self) -> CellKind {
        match self {
            Variant::Mycoplasma => CellKind::Mycoplasma,
            Variant::Disease { .. } => CellKind::Disease,
            Variant::Chameleon { .. } => CellKind::Chameleon,
            Variant::Chaos { .. } => CellKind::Chaos,
            Variant::Cleansing { .. } => CellKind::Cleansing,
            Variant::Evolving { .. } => CellKind::Evolving,
            Variant::Purger { .. } => CellKind::Purger,
        }
    }

    fn vitals(&self) -> Option<&Vitals> {
        match self {
            Variant::Mycoplasma => None,
            Variant::Disease { vitals, .. }
            | Variant::Chameleon { vitals, .. }
            | Variant::Chaos { vitals }
            | Variant::Cleansing { vitals }
            | Variant::Evolving { vitals, .. }
            | Variant::Purger { vitals } => Some(vitals),
        }
    }

    fn vitals_mut(&mut self) -> Option<&mut Vitals> {
        match self {
            Variant::Mycoplasma => None,
            Variant::Disease { vitals, .. }
            | Variant::Chameleon { vitals, .. }
            | Variant::Chaos { vitals }
            | Variant::Cleansing { vitals }
            | Variant::Evolving { vitals, .. }
            | Variant::Purger { vitals } => Some(vitals),
        }
    }
}

/// An immediate cross-cell effect, applied by the field as soon as the
/// acting cell's `act` returns, distinct from the pending-alive commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Give the target a fresh disease with this bonus. A no-op unless
    /// the target is susceptible when the effect lands.
    Infect { target: usize, bonus: u32 },
    /// Clear the target's infection.
    Cure { target: usize },
    /// Drop the target's health to zero and schedule it dead.
    Strike { target: usize },
    /// Schedule the target alive again with full health.
    Revive { target: usize },
}

/// What a cell sees of one neighbor when it acts.
#[derive(Clone, Copy, Debug)]
pub struct NeighborView {
    /// Slot index of the neighbor in the field.
    pub index: usize,
    pub kind: CellKind,
    /// Health-aware liveness at the moment the snapshot was taken.
    pub alive: bool,
    /// The neighbor's active infection, if it is alive and infected.
    pub infection: Option<Disease>,
}

impl NeighborView {
    /// Living, disease-capable, and not yet infected.
    pub fn is_susceptible(&self) -> bool {
        self.alive && self.kind.is_disease_capable() && self.infection.is_none()
    }
}

/// Per-act view of a cell's Moore neighborhood, built by the field.
#[derive(Clone, Debug, Default)]
pub struct NeighborhoodSnapshot {
    pub neighbors: Vec<NeighborView>,
}

impl NeighborhoodSnapshot {
    pub fn living_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.alive).count()
    }

    pub fn living(&self) -> impl Iterator<Item = &NeighborView> {
        self.neighbors.iter().filter(|n| n.alive)
    }

    /// First infected living neighbor in fixed neighbor-list order.
    pub fn first_infected(&self) -> Option<&NeighborView> {
        self.neighbors
            .iter()
            .find(|n| n.alive && n.infection.is_some())
    }
}

/// A single grid cell. Created once per slot and never replaced; only
/// its alive flag, health, and infection evolve.
#[derive(Clone, Debug)]
pub struct Cell {
    alive: bool,
    next_alive: bool,
    color: Color,
    variant: Variant,
}

impl Cell {
    pub fn new(kind: CellKind, alive: bool) -> Self {
        let variant = Variant::new(kind);
        let mut cell = Self {
            alive,
            next_alive: alive,
            color: Color::Dead,
            variant,
        };
        if alive {
            cell.color = cell.resting_color();
        }
        cell
    }

    pub fn kind(&self) -> CellKind {
        self.variant.kind()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Health-aware liveness: a health-bearing cell with zero health
    /// reports dead immediately, before any commit.
    pub fn is_alive(&self) -> bool {
        match self.variant.vitals() {
            Some(vitals) => self.alive && vitals.health > 0,
            None => self.alive,
        }
    }

    /// The pending alive flag, as decided so far this generation.
    pub fn will_live(&self) -> bool {
        self.next_alive
    }

    pub fn health(&self) -> Option<u32> {
        self.variant.vitals().map(|v| v.health)
    }

    pub fn disease(&self) -> Option<Disease> {
        self.variant.vitals().and_then(|v| v.disease)
    }

    pub fn is_susceptible(&self) -> bool {
        self.kind().is_disease_capable() && self.is_alive() && self.disease().is_none()
    }

    /// Write the pending flag. Scheduling death clears the infection at
    /// that moment: a dead cell never carries a disease into death or
    /// revival.
    pub fn set_next_state(&mut self, alive: bool) {
        self.next_alive = alive;
        if !alive {
            if let Some(vitals) = self.variant.vitals_mut() {
                vitals.disease = None;
            }
        }
    }

    /// The overcrowding rule shared by every variant except Mycoplasma:
    /// survive while the living-neighbor count stays below the threshold.
    pub fn assign_next_state(&mut self, living: usize, threshold: usize) {
        self.set_next_state(living < threshold);
    }

    /// Commit the pending flag. Called exactly once per cell per
    /// generation, directly after that cell's `act`.
    pub fn update_state(&mut self) {
        self.alive = self.next_alive;
    }

    /// The variant's death threshold for this generation, lowered by one
    /// while infected for the variants that fight weaker when sick.
    /// Mycoplasma, DiseaseCell and PurgerCell use fixed values.
    pub fn death_threshold(&self) -> usize {
        let infected = self.disease().is_some();
        match &self.variant {
            Variant::Mycoplasma => mycoplasma::OVERCROWD_THRESHOLD,
            Variant::Disease { .. } => disease_cell::DEATH_THRESHOLD,
            Variant::Chameleon { .. } => adjusted(chameleon::DEATH_THRESHOLD, infected),
            Variant::Chaos { .. } => adjusted(chaos::DEATH_THRESHOLD, infected),
            Variant::Cleansing { .. } => adjusted(cleansing::DEATH_THRESHOLD, infected),
            Variant::Evolving { age, .. } => {
                adjusted(evolving::Stage::from_age(*age).base_threshold(), infected)
            }
            Variant::Purger { .. } => purger::DEATH_THRESHOLD,
        }
    }

    pub fn take_damage(&mut self, damage: u32) {
        if let Some(vitals) = self.variant.vitals_mut() {
            vitals.take_damage(damage);
        }
    }

    pub fn heal(&mut self, amount: u32, cap: u32) {
        if let Some(vitals) = self.variant.vitals_mut() {
            vitals.heal(amount, cap);
        }
    }

    /// One decision step. Branches on current liveness; the alive branch
    /// resolves infection bookkeeping and color before the variant rule
    /// runs. Returns the immediate effects to apply to neighbors.
    pub fn act(&mut self, hood: &NeighborhoodSnapshot, rng: &mut impl Rng) -> Vec<Effect> {
        if self.is_alive() {
            self.infection_upkeep(hood);
            self.refresh_color();
            match self.kind() {
                CellKind::Mycoplasma => mycoplasma::act_alive(self, hood),
                CellKind::Disease => disease_cell::act_alive(self, hood),
                CellKind::Chameleon => chameleon::act_alive(self, hood),
                CellKind::Chaos => chaos::act_alive(self, hood, rng),
                CellKind::Cleansing => cleansing::act_alive(self, hood),
                CellKind::Evolving => evolving::act_alive(self, hood),
                CellKind::Purger => purger::act_alive(self, hood),
            }
        } else {
            match self.kind() {
                CellKind::Mycoplasma => mycoplasma::act_dead(self, hood),
                CellKind::Chameleon => chameleon::act_dead(self, hood),
                CellKind::Chaos => chaos::act_dead(self, rng),
                _ => {}
            }
            // A dead cell always shows the dead sentinel and carries
            // no infection, whatever the dead-state behavior decided.
            self.color = Color::Dead;
            if let Some(vitals) = self.variant.vitals_mut() {
                vitals.disease = None;
            }
            Vec::new()
        }
    }

    /// Infection bookkeeping for the alive branch: take damage while
    /// infected, otherwise catch a fresh disease from the first infected
    /// living neighbor found. Mycoplasma ignores disease entirely.
    fn infection_upkeep(&mut self, hood: &NeighborhoodSnapshot) {
        let caught = match self.variant.vitals() {
            Some(vitals) if vitals.disease.is_none() => hood
                .first_infected()
                .and_then(|n| n.infection)
                .map(|d| d.rederive()),
            _ => None,
        };
        if let Some(vitals) = self.variant.vitals_mut() {
            match vitals.disease {
                Some(disease) => vitals.take_damage(disease.damage()),
                None => vitals.disease = caught,
            }
        }
    }

    /// Recompute the display color from current state. The infected
    /// sentinel wins over the variant's own color logic.
    fn refresh_color(&mut self) {
        self.color = if self.disease().is_some() {
            Color::Infected
        } else {
            self.resting_color()
        };
    }

    fn resting_color(&self) -> Color {
        match &self.variant {
            Variant::Mycoplasma => Color::Orchid,
            Variant::Disease { .. } => Color::DarkGreen,
            Variant::Chameleon { shade, .. } => chameleon::PALETTE[*shade],
            Variant::Chaos { .. } => Color::Purple,
            Variant::Cleansing { .. } => Color::SkyBlue,
            Variant::Evolving { age, .. } => evolving::Stage::from_age(*age).color(),
            Variant::Purger { .. } => Color::Orange,
        }
    }

    // --- effect application hooks, called by the field ---

    /// Land an infection, if the cell is susceptible right now.
    pub(crate) fn receive_infection(&mut self, bonus: u32) {
        if !self.is_susceptible() {
            return;
        }
        if let Some(vitals) = self.variant.vitals_mut() {
            vitals.disease = Some(Disease::new(bonus));
        }
    }

    /// Clear any active infection.
    pub(crate) fn receive_cure(&mut self) {
        if let Some(vitals) = self.variant.vitals_mut() {
            vitals.disease = None;
        }
    }

    /// Drop health to zero and schedule death.
    pub(crate) fn receive_strike(&mut self) {
        if let Some(vitals) = self.variant.vitals_mut() {
            vitals.health = 0;
        }
        self.set_next_state(false);
    }

    /// Schedule revival with the variant's full starting health.
    pub(crate) fn receive_revival(&mut self) {
        let full = self.kind().initial_health();
        if let (Some(vitals), Some(full)) = (self.variant.vitals_mut(), full) {
            vitals.health = full;
        }
        self.set_next_state(true);
    }
}

fn adjusted(base: usize, infected: bool) -> usize {
    if infected {
        base.saturating_sub(1)
    } else {
        base
    }
}

#[cfg(test)]
pub(crate) fn snapshot_of(views: Vec<NeighborView>) -> NeighborhoodSnapshot {
    NeighborhoodSnapshot { neighbors: views }
}

#[cfg(test)]
pub(crate) fn living_neighbor(index: usize, kind: CellKind) -> NeighborView {
    NeighborView {
        index,
        kind,
        alive: true,
        infection: None,
    }
}
