//! Built-in patterns and pattern placement.

use crate::{cells::State, error::Error, grid::Grid};

/// A rectangular pattern template.
///
/// The rows are written in the plain-text alphabet: `.` for a dead
/// cell, `o` for a living one. All rows have the same width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    rows: &'static [&'static str],
}

/// The glider, the smallest spaceship.
///
/// Travels one cell down and one cell to the right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &["..o", "o.o", ".oo"],
};

/// The Gosper glider gun.
///
/// Fires a glider towards the lower right every 30 generations.
pub const GOSPER_GUN: Pattern = Pattern {
    name: "Gosper glider gun",
    rows: &[
        "........................o...........",
        "......................o.o...........",
        "............oo......oo............oo",
        "...........o...o....oo............oo",
        "oo........o.....o...oo..............",
        "oo........o...o.oo....o.o...........",
        "..........o.....o.......o...........",
        "...........o...o....................",
        "............oo......................",
    ],
};

impl Pattern {
    /// The name of the pattern.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The number of rows in the template.
    #[inline]
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns in the template.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// The state of the template cell at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the template.
    pub fn cell(&self, row: usize, col: usize) -> State {
        if self.rows[row].as_bytes()[col] == b'o' {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// Stamps a pattern onto a grid, with its top-left corner at
/// `(row, col)`.
///
/// The whole rectangle covered by the template is overwritten, dead
/// template cells included. Placement is not toroidal: a pattern that
/// would stick out past the edge is rejected with
/// [`Error::OutOfBounds`], and the grid is left untouched.
pub fn place(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) -> Result<(), Error> {
    let size = grid.size();
    if row.saturating_add(pattern.height()) > size || col.saturating_add(pattern.width()) > size {
        return Err(Error::OutOfBounds(String::from(pattern.name), row, col));
    }
    for (dr, cells) in pattern.rows.iter().enumerate() {
        for (dc, cell) in cells.bytes().enumerate() {
            let state = if cell == b'o' {
                State::Alive
            } else {
                State::Dead
            };
            grid.set(((row + dr) as isize, (col + dc) as isize), state);
        }
    }
    Ok(())
}
