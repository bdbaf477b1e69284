//! The world: a square grid of cells on a torus.

use crate::{
    cells::{Coord, State},
    error::Error,
};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// A square grid of cells with toroidal boundary conditions.
///
/// The cells are stored as a flat vector in row-major order. Opposite
/// edges of the grid are glued together: the accessors reduce both
/// coordinates modulo the side length, so the neighbors of an edge cell
/// are found on the opposite edge, and every [`Coord`] refers to some
/// cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// The side length.
    size: usize,
    /// The cells, row by row.
    cells: Vec<State>,
}

impl Grid {
    /// Creates an all-dead grid with the given side length.
    ///
    /// Returns [`Error::InvalidDimension`] if `size` is zero, or if the
    /// cell count `size * size` does not fit in a `usize`. The latter
    /// guards against huge dimensions from parsed input.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidDimension(size));
        }
        let area = size
            .checked_mul(size)
            .ok_or(Error::InvalidDimension(size))?;
        Ok(Self {
            size,
            cells: vec![State::Dead; area],
        })
    }

    /// Creates a randomly filled grid.
    ///
    /// Each cell starts alive with probability `density`, independently
    /// of the others.
    ///
    /// Returns [`Error::InvalidDimension`] if `size` is zero, and
    /// [`Error::InvalidDensity`] if `density` is not within `0.0..=1.0`.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        let mut grid = Self::new(size)?;
        for cell in grid.cells.iter_mut() {
            if rng.gen_bool(density) {
                *cell = State::Alive;
            }
        }
        Ok(grid)
    }

    /// The side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of living cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == State::Alive)
            .count()
    }

    /// The index of a cell in the flat vector, wrapping both coordinates.
    #[inline]
    fn index(&self, coord: Coord) -> usize {
        let size = self.size as isize;
        let row = coord.0.rem_euclid(size) as usize;
        let col = coord.1.rem_euclid(size) as usize;
        row * self.size + col
    }

    /// The state of the cell at the given coordinates.
    ///
    /// Both coordinates wrap around the edges, so this never fails;
    /// e.g. `(-1, -1)` reads the bottom-right corner.
    #[inline]
    pub fn get(&self, coord: Coord) -> State {
        self.cells[self.index(coord)]
    }

    /// Sets the state of the cell at the given coordinates.
    ///
    /// The coordinates wrap like in [`get`](Grid::get).
    #[inline]
    pub fn set(&mut self, coord: Coord, state: State) {
        let index = self.index(coord);
        self.cells[index] = state;
    }

    /// Replaces the whole grid with another one of the same size.
    ///
    /// Returns [`Error::SizeMismatch`] if the sizes differ, leaving the
    /// grid unchanged.
    pub fn replace(&mut self, other: Grid) -> Result<(), Error> {
        if other.size != self.size {
            return Err(Error::SizeMismatch(self.size, other.size));
        }
        *self = other;
        Ok(())
    }
}

/// Plain-text rendering: one line per row, `.` for a dead cell and `o`
/// for a living one.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let mut text = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            for &state in row {
                text.push(match state {
                    State::Dead => '.',
                    State::Alive => 'o',
                });
            }
            text.push('\n');
        }
        f.write_str(&text)
    }
}
