//! Frame colors and the pluggable sources that hand out new ones.
//!
//! Every split asks a [`ColorSource`] for two fresh colors. The default source
//! is uniformly random; tests and reproducible sessions use a seeded
//! [`RandomColors`] or a fixed [`ColorCycle`].

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An opaque 24-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The component-wise inverse (`255 - c`), used for outlines drawn on top
    /// of a fill of this color.
    #[inline]
    pub const fn contrast(self) -> Color {
        Color {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a color string is not `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #rrggbb or #rgb")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_owned());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // Expand: 0xA -> 0xAA
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::new(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorSource
// ---------------------------------------------------------------------------

/// Hands out colors for newly created frames.
pub trait ColorSource {
    /// Produce the next color.
    fn next_color(&mut self) -> Color;
}

impl<F> ColorSource for F
where
    F: FnMut() -> Color,
{
    fn next_color(&mut self) -> Color {
        self()
    }
}

/// Uniformly random colors.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: SmallRng,
}

impl RandomColors {
    /// Random colors seeded from the operating system.
    pub fn new() -> Self {
        Self { rng: SmallRng::from_os_rng() }
    }

    /// Random colors from a fixed seed. The same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::new(self.rng.random(), self.rng.random(), self.rng.random())
    }
}

/// A fixed palette handed out in order, wrapping around at the end.
///
/// An empty palette yields [`Color::WHITE`] forever.
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    palette: Vec<Color>,
    next: usize,
}

impl ColorCycle {
    /// Create a cycle over `palette`.
    pub fn new(palette: impl IntoIterator<Item = Color>) -> Self {
        Self {
            palette: palette.into_iter().collect(),
            next: 0,
        }
    }
}

impl ColorSource for ColorCycle {
    fn next_color(&mut self) -> Color {
        if self.palette.is_empty() {
            return Color::WHITE;
        }
        let color = self.palette[self.next % self.palette.len()];
        self.next = (self.next + 1) % self.palette.len();
        color
    }
}

// ===========================================================================
// Tests
// ===========================================================================
