//! Reading a grid from a pattern file.
//!
//! The format is whitespace-delimited text. The first line holds the
//! side length `N`. Each following line holds one row of `N` cells,
//! `255` for a living cell and `0` for a dead one:
//!
//! ```plaintext
//! 3
//! 0 255 0
//! 0 255 0
//! 0 255 0
//! ```
//!
//! A file may supply fewer than `N` rows; the missing trailing rows are
//! left dead. A row that is present must be complete and well-formed.
//! Anything after the `N`-th row is ignored.

use crate::{cells::State, error::Error, grid::Grid};
use std::str::FromStr;

/// The cell value for a living cell in the on-disk format.
const ON: u32 = 255;
/// The cell value for a dead cell in the on-disk format.
const OFF: u32 = 0;

/// Parses the text of a pattern file into a grid.
///
/// Returns [`Error::MalformedHeader`] if the first line is not a
/// positive integer, and [`Error::MalformedRow`] if a data row does not
/// hold exactly `N` values, or holds a value other than `0` and `255`.
/// The row number in the error is 1-based.
pub fn parse(text: &str) -> Result<Grid, Error> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or("").trim();
    let size = header
        .parse::<usize>()
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| Error::MalformedHeader(String::from(header)))?;
    let mut grid = Grid::new(size)?;
    for (row, line) in lines.take(size).enumerate() {
        parse_row(&mut grid, row, line)?;
    }
    Ok(grid)
}

/// Parses one data row into the grid.
fn parse_row(grid: &mut Grid, row: usize, line: &str) -> Result<(), Error> {
    let size = grid.size();
    let mut count = 0;
    for (col, token) in line.split_whitespace().enumerate() {
        if col >= size {
            return Err(Error::MalformedRow(
                row + 1,
                format!("expected {} cells, found more", size),
            ));
        }
        match token.parse::<u32>() {
            Ok(ON) => grid.set((row as isize, col as isize), State::Alive),
            Ok(OFF) => (),
            _ => {
                return Err(Error::MalformedRow(
                    row + 1,
                    format!("invalid cell value {:?}", token),
                ));
            }
        }
        count += 1;
    }
    if count != size {
        return Err(Error::MalformedRow(
            row + 1,
            format!("expected {} cells, found {}", size, count),
        ));
    }
    Ok(())
}

/// Parses the text of a pattern file. See [`parse`].
impl FromStr for Grid {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
