//! Running a simulation and interacting with it.

use crate::{error::Error, grid::Grid, rules};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Commands a frontend sends to the simulation.
///
/// Interaction goes through plain values: the frontend translates its
/// input events into commands and feeds them to
/// [`Simulation::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Flips the cell under the given continuous position.
    ///
    /// The coordinates are floored to a cell index and wrapped, so any
    /// finite position on the plane maps to some cell.
    ToggleCell {
        /// The continuous row coordinate.
        row: f64,
        /// The continuous column coordinate.
        col: f64,
    },
    /// Pauses or resumes automatic stepping.
    TogglePause,
}

/// A running Game of Life.
///
/// Owns the current grid, counts generations, and carries the paused
/// flag. It has no clock of its own: the frontend decides when to call
/// [`step`](Simulation::step), and while paused it simply stops asking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    paused: bool,
}

impl Simulation {
    /// Creates a simulation starting from the given grid, running.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            paused: false,
        }
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of generations computed so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether automatic stepping is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances the simulation by one generation.
    ///
    /// This always computes a step, even while paused: frontends gate
    /// their automatic cadence on [`is_paused`](Simulation::is_paused),
    /// and may still call this for an explicit single step.
    pub fn step(&mut self) {
        self.grid = rules::step(&self.grid);
        self.generation += 1;
    }

    /// Pauses or resumes automatic stepping.
    ///
    /// Pausing stops nothing but the clock: the frontend keeps handling
    /// input and drawing, and toggling cells stays possible.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Flips the cell under the given continuous position.
    ///
    /// Each coordinate is floored, then wrapped modulo the grid size,
    /// so positions slightly outside the grid still land on a cell.
    /// Toggling the same position twice restores the original state.
    /// Non-finite coordinates are ignored.
    pub fn toggle_cell(&mut self, row: f64, col: f64) {
        if !row.is_finite() || !col.is_finite() {
            return;
        }
        let coord = (row.floor() as isize, col.floor() as isize);
        self.grid.set(coord, !self.grid.get(coord));
    }

    /// Applies a command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::ToggleCell { row, col } => self.toggle_cell(row, col),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    /// Restarts from a new grid of the same size.
    ///
    /// The generation counter returns to zero; the paused flag is kept.
    /// Returns [`Error::SizeMismatch`] if the sizes differ.
    pub fn reset(&mut self, grid: Grid) -> Result<(), Error> {
        self.grid.replace(grid)?;
        self.generation = 0;
        Ok(())
    }
}
