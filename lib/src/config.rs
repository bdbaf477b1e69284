//! World configuration.

use crate::{
    error::Error,
    grid::Grid,
    patterns::{self, GLIDER, GOSPER_GUN},
};
use educe::Educe;
use rand::thread_rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the initial grid is seeded.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seed {
    /// A random fill: every cell starts alive with the configured
    /// density.
    #[educe(Default)]
    Random,
    /// A single glider at (1, 1) on an otherwise dead grid.
    Glider,
    /// The Gosper glider gun at (1, 1) on an otherwise dead grid.
    GosperGun,
    /// An all-dead grid.
    Empty,
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The side length of the square grid.
    #[educe(Default = 100)]
    pub size: usize,

    /// The density of the random fill.
    ///
    /// The probability for a cell to start alive when the seed is
    /// [`Seed::Random`]. Must be within `0.0..=1.0`.
    #[educe(Default = 0.3)]
    pub density: f64,

    /// How the initial grid is seeded.
    pub seed: Seed,
}

impl Config {
    /// Sets up a new configuration with the given grid size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the grid size.
    pub fn set_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the density of the random fill.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets how the initial grid is seeded.
    pub fn set_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Creates the starting grid from the configuration.
    ///
    /// Returns an error if the size is zero, the density is out of
    /// range, or the seeded pattern does not fit in the grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        match self.seed {
            Seed::Random => Grid::random(self.size, self.density, &mut thread_rng()),
            Seed::Glider => {
                let mut grid = Grid::new(self.size)?;
                patterns::place(&mut grid, &GLIDER, 1, 1)?;
                Ok(grid)
            }
            Seed::GosperGun => {
                let mut grid = Grid::new(self.size)?;
                patterns::place(&mut grid, &GOSPER_GUN, 1, 1)?;
                Ok(grid)
            }
            Seed::Empty => Grid::new(self.size),
        }
    }
}
