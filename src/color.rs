//! Display palette for the grid consumer.
//!
//! Colors carry no behavior of their own except one overload: `Infected`
//! is a sentinel that replaces a variant's resting color while it
//! carries a disease, and `Dead` is what every dead cell shows.

/// Every hue a cell can report to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Shown by any dead cell, regardless of variant.
    Dead,
    /// Overrides a variant's own color while it carries a disease.
    Infected,
    /// Mycoplasma resting color.
    Orchid,
    /// DiseaseCell resting color.
    DarkGreen,
    /// Chameleon palette.
    Pink,
    Violet,
    Teal,
    /// ChaosCell resting color.
    Purple,
    /// CleansingCell resting color.
    SkyBlue,
    /// EvolvingCell stage colors (young, mature, elderly).
    YellowGreen,
    Goldenrod,
    Sienna,
    /// PurgerCell resting color.
    Orange,
}

impl Color {
    /// RGB triple for rendering consumers.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Dead => (211, 211, 211),
            Color::Infected => (220, 20, 60),
            Color::Orchid => (218, 112, 214),
            Color::DarkGreen => (0, 100, 0),
            Color::Pink => (255, 192, 203),
            Color::Violet => (238, 130, 238),
            Color::Teal => (0, 128, 128),
            Color::Purple => (128, 0, 128),
            Color::SkyBlue => (135, 206, 235),
            Color::YellowGreen => (154, 205, 50),
            Color::Goldenrod => (218, 165, 32),
            Color::Sienna => (160, 82, 45),
            Color::Orange => (255, 165, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Dead => "dead",
            Color::Infected => "infected",
            Color::Orchid => "orchid",
            Color::DarkGreen => "dark green",
            Color::Pink => "pink",
            Color::Violet => "violet",
            Color::Teal => "teal",
            Color::Purple => "purple",
            Color::SkyBlue => "sky blue",
            Color::YellowGreen => "yellow green",
            Color::Goldenrod => "goldenrod",
            Color::Sienna => "sienna",
            Color::Orange => "orange",
        }
    }
}
