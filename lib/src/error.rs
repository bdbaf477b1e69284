//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid grid size: {0}. The size must be positive and the grid must fit in memory.
    InvalidDimension(usize),
    /// Invalid fill density: {0}. The density must be within `0.0..=1.0`.
    InvalidDensity(f64),
    /// Pattern `{0}` does not fit in the grid at ({1}, {2}).
    OutOfBounds(String, usize, usize),
    /// Malformed header line {0:?}: expected a positive integer.
    MalformedHeader(String),
    /// Malformed row {0}: {1}.
    MalformedRow(usize, String),
    /// Cannot replace a grid of size {0} with a grid of size {1}.
    SizeMismatch(usize, usize),
}
